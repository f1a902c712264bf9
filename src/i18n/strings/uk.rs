use crate::i18n::StringName;

/// Ukrainian strings.
pub const UK_STRINGS: &[(StringName, &str)] = &[
    (StringName::AppTitle, "Чилі та Коріандр"),
    // Common
    (StringName::CommonCancel, "Скасувати"),
    (StringName::CommonChangePassword, "Змінити пароль"),
    (StringName::CommonDashboard, "Панель керування"),
    (StringName::CommonEmail, "Електронна пошта"),
    (StringName::CommonGameCode, "Код гри"),
    (StringName::CommonHome, "Головна"),
    (StringName::CommonLanguage, "Мова"),
    (StringName::CommonLoading, "Завантаження..."),
    (StringName::CommonLogout, "Вийти"),
    (StringName::CommonPassword, "Пароль"),
    (StringName::CommonSubmit, "Надіслати"),
    (StringName::CommonUnexpectedError, "Сталася неочікувана помилка"),
    (StringName::CommonUsername, "Ім'я користувача"),
    // Login
    (StringName::LoginTitle, "Вхід"),
    (StringName::LoginLoginButton, "Увійти"),
    (StringName::LoginUseEmail, "Використати електронну пошту"),
    (StringName::LoginUseUsername, "Використати ім'я користувача"),
    (StringName::LoginUsernameOrEmailRequired, "Потрібне ім'я користувача або електронна пошта"),
    // Registration
    (StringName::RegisterTitle, "Реєстрація"),
    (StringName::RegisterRegisterButton, "Зареєструватися"),
    (StringName::RegisterSuccess, "Реєстрація успішна! Перевірте електронну пошту, щоб підтвердити обліковий запис."),
    (StringName::RegisterError, "Під час реєстрації сталася помилка"),
    // Validation
    (StringName::ValidationRequired, "Це поле обов'язкове"),
    (StringName::ValidationInvalidEmail, "Недійсна адреса електронної пошти"),
    (StringName::ValidationInvalidUsername, "Ім'я користувача може містити лише літери, цифри, підкреслення та дефіси"),
    (StringName::ValidationPasswordsMustMatch, "Паролі повинні збігатися"),
    (StringName::ValidationUsernameMinLengthTemplate, "Ім'я користувача повинно містити щонайменше {MIN_USERNAME_LENGTH} символів"),
    (StringName::ValidationPasswordMinLengthTemplate, "Пароль повинен містити щонайменше {MIN_PASSWORD_LENGTH} символів"),
    (StringName::ValidationInvalidGameCode, "Недійсний код гри"),
    // Change password
    (StringName::ChangePasswordSuccess, "Ваш пароль змінено"),
    (StringName::ChangePasswordCurrentPassword, "Поточний пароль"),
    (StringName::ChangePasswordNewPassword, "Новий пароль"),
    (StringName::ChangePasswordConfirmNewPassword, "Підтвердьте новий пароль"),
    // Forgot / reset password
    (StringName::ForgotPasswordTitle, "Забули пароль"),
    (StringName::ForgotPasswordSendResetLink, "Надіслати посилання для скидання"),
    (StringName::ForgotPasswordSuccess, "Якщо обліковий запис із цією адресою існує, посилання для скидання пароля надіслано"),
    (StringName::ResetPasswordTitle, "Скинути пароль"),
    (StringName::ResetPasswordSuccess, "Ваш пароль скинуто"),
    (StringName::ResetPasswordInvalidToken, "Це посилання недійсне або термін його дії минув"),
    // Email verification
    (StringName::EmailVerificationVerifying, "Перевірка вашої електронної пошти..."),
    (StringName::EmailVerificationSuccess, "Вашу електронну пошту підтверджено"),
    (StringName::EmailVerificationFailed, "Не вдалося підтвердити електронну пошту"),
    (StringName::EmailVerificationResend, "Надіслати лист підтвердження повторно"),
    // Game
    (StringName::GameCreateGame, "Створити гру"),
    (StringName::GameJoinGame, "Приєднатися до гри"),
    (StringName::GameYourTurn, "Ваш хід"),
    (StringName::GameWaitingForChefs, "Очікування кухарів..."),
    (StringName::GameMaxChefsTemplate, "До {MAX_CHEFS} кухарів"),
    (StringName::GameChefNameRequired, "Ім'я кухаря обов'язкове"),
    (StringName::GameBidTemplate, "{NAME} ставить {BID}"),
    (StringName::GameWinnerTemplate, "{NAME} перемагає у грі!"),
    // Dashboard
    (StringName::DashboardTitle, "Ваша панель"),
    (StringName::DashboardGamesCreated, "Створені вами ігри"),
    (StringName::DashboardGamesParticipating, "Ігри, у яких ви берете участь"),
    (StringName::DashboardNoGames, "Ігор поки немає"),
    // Misc
    (StringName::LanguageUpdateSuccess, "Мову оновлено"),
    (StringName::SplashWelcome, "Ласкаво просимо до гри Чилі та Коріандр!"),
    (StringName::SplashDescription, "У семи кухарів суп пересолений. Робіть ставки, блефуйте й уникайте чилі."),
];
