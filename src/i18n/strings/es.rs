use crate::i18n::StringName;

/// Spanish strings.
pub const ES_STRINGS: &[(StringName, &str)] = &[
    (StringName::AppTitle, "Chile y Cilantro"),
    // Common
    (StringName::CommonCancel, "Cancelar"),
    (StringName::CommonChangePassword, "Cambiar contraseña"),
    (StringName::CommonDashboard, "Panel"),
    (StringName::CommonEmail, "Correo electrónico"),
    (StringName::CommonGameCode, "Código de juego"),
    (StringName::CommonHome, "Inicio"),
    (StringName::CommonLanguage, "Idioma"),
    (StringName::CommonLoading, "Cargando..."),
    (StringName::CommonLogout, "Cerrar sesión"),
    (StringName::CommonPassword, "Contraseña"),
    (StringName::CommonSubmit, "Enviar"),
    (StringName::CommonUnexpectedError, "Ocurrió un error inesperado"),
    (StringName::CommonUsername, "Nombre de usuario"),
    // Login
    (StringName::LoginTitle, "Iniciar sesión"),
    (StringName::LoginLoginButton, "Iniciar sesión"),
    (StringName::LoginUseEmail, "Usar correo electrónico"),
    (StringName::LoginUseUsername, "Usar nombre de usuario"),
    (StringName::LoginUsernameOrEmailRequired, "Se requiere nombre de usuario o correo electrónico"),
    // Registration
    (StringName::RegisterTitle, "Registrarse"),
    (StringName::RegisterRegisterButton, "Registrarse"),
    (StringName::RegisterSuccess, "¡Registro exitoso! Revisa tu correo electrónico para verificar tu cuenta."),
    (StringName::RegisterError, "Ocurrió un error durante el registro"),
    // Validation
    (StringName::ValidationRequired, "Este campo es obligatorio"),
    (StringName::ValidationInvalidEmail, "Correo electrónico inválido"),
    (StringName::ValidationInvalidUsername, "El nombre de usuario solo puede contener letras, números, guiones y guiones bajos"),
    (StringName::ValidationPasswordsMustMatch, "Las contraseñas deben coincidir"),
    (StringName::ValidationUsernameMinLengthTemplate, "El nombre de usuario debe tener al menos {MIN_USERNAME_LENGTH} caracteres"),
    (StringName::ValidationPasswordMinLengthTemplate, "La contraseña debe tener al menos {MIN_PASSWORD_LENGTH} caracteres"),
    (StringName::ValidationInvalidGameCode, "Código de juego inválido"),
    // Change password
    (StringName::ChangePasswordSuccess, "Tu contraseña ha sido cambiada"),
    (StringName::ChangePasswordCurrentPassword, "Contraseña actual"),
    (StringName::ChangePasswordNewPassword, "Nueva contraseña"),
    (StringName::ChangePasswordConfirmNewPassword, "Confirmar nueva contraseña"),
    // Forgot / reset password
    (StringName::ForgotPasswordTitle, "Olvidé mi contraseña"),
    (StringName::ForgotPasswordSendResetLink, "Enviar enlace de restablecimiento"),
    (StringName::ForgotPasswordSuccess, "Si existe una cuenta con ese correo, se ha enviado un enlace para restablecer la contraseña"),
    (StringName::ResetPasswordTitle, "Restablecer contraseña"),
    (StringName::ResetPasswordSuccess, "Tu contraseña ha sido restablecida"),
    (StringName::ResetPasswordInvalidToken, "Este enlace de restablecimiento no es válido o ha caducado"),
    // Email verification
    (StringName::EmailVerificationVerifying, "Verificando tu correo electrónico..."),
    (StringName::EmailVerificationSuccess, "Tu correo electrónico ha sido verificado"),
    (StringName::EmailVerificationFailed, "La verificación del correo electrónico falló"),
    (StringName::EmailVerificationResend, "Reenviar correo de verificación"),
    // Game
    (StringName::GameCreateGame, "Crear juego"),
    (StringName::GameJoinGame, "Unirse al juego"),
    (StringName::GameYourTurn, "Es tu turno"),
    (StringName::GameWaitingForChefs, "Esperando a que se unan los chefs..."),
    (StringName::GameMaxChefsTemplate, "Hasta {MAX_CHEFS} chefs"),
    (StringName::GameChefNameRequired, "El nombre del chef es obligatorio"),
    (StringName::GameBidTemplate, "{NAME} apuesta {BID}"),
    (StringName::GameWinnerTemplate, "¡{NAME} gana el juego!"),
    // Dashboard
    (StringName::DashboardTitle, "Tu panel"),
    (StringName::DashboardGamesCreated, "Juegos que creaste"),
    (StringName::DashboardGamesParticipating, "Juegos en los que participas"),
    (StringName::DashboardNoGames, "Aún no hay juegos"),
    // Misc
    (StringName::LanguageUpdateSuccess, "Idioma actualizado"),
    (StringName::SplashWelcome, "¡Bienvenido a Chile y Cilantro!"),
    (StringName::SplashDescription, "Muchos cocineros arruinan la sopa. Apuesta, farolea y evita el chile."),
];
