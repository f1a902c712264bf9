use crate::i18n::StringName;

/// English (US) strings. This is the reference table the validator compares
/// placeholders against.
pub const EN_US_STRINGS: &[(StringName, &str)] = &[
    (StringName::AppTitle, "Chili and Cilantro"),
    // Common
    (StringName::CommonCancel, "Cancel"),
    (StringName::CommonChangePassword, "Change Password"),
    (StringName::CommonDashboard, "Dashboard"),
    (StringName::CommonEmail, "Email"),
    (StringName::CommonGameCode, "Game Code"),
    (StringName::CommonHome, "Home"),
    (StringName::CommonLanguage, "Language"),
    (StringName::CommonLoading, "Loading..."),
    (StringName::CommonLogout, "Log Out"),
    (StringName::CommonPassword, "Password"),
    (StringName::CommonSubmit, "Submit"),
    (StringName::CommonUnexpectedError, "An unexpected error occurred"),
    (StringName::CommonUsername, "Username"),
    // Login
    (StringName::LoginTitle, "Log In"),
    (StringName::LoginLoginButton, "Log In"),
    (StringName::LoginUseEmail, "Use email instead"),
    (StringName::LoginUseUsername, "Use username instead"),
    (StringName::LoginUsernameOrEmailRequired, "Either username or email is required"),
    // Registration
    (StringName::RegisterTitle, "Register"),
    (StringName::RegisterRegisterButton, "Register"),
    (StringName::RegisterSuccess, "Registration successful! Please check your email to verify your account."),
    (StringName::RegisterError, "An error occurred during registration"),
    // Validation
    (StringName::ValidationRequired, "This field is required"),
    (StringName::ValidationInvalidEmail, "Invalid email address"),
    (StringName::ValidationInvalidUsername, "Username may only contain letters, numbers, underscores and hyphens"),
    (StringName::ValidationPasswordsMustMatch, "Passwords must match"),
    (StringName::ValidationUsernameMinLengthTemplate, "Username must be at least {MIN_USERNAME_LENGTH} characters long"),
    (StringName::ValidationPasswordMinLengthTemplate, "Password must be at least {MIN_PASSWORD_LENGTH} characters long"),
    (StringName::ValidationInvalidGameCode, "Invalid game code"),
    // Change password
    (StringName::ChangePasswordSuccess, "Your password has been changed"),
    (StringName::ChangePasswordCurrentPassword, "Current Password"),
    (StringName::ChangePasswordNewPassword, "New Password"),
    (StringName::ChangePasswordConfirmNewPassword, "Confirm New Password"),
    // Forgot / reset password
    (StringName::ForgotPasswordTitle, "Forgot Password"),
    (StringName::ForgotPasswordSendResetLink, "Send Reset Link"),
    (StringName::ForgotPasswordSuccess, "If an account with that email exists, a password reset link has been sent"),
    (StringName::ResetPasswordTitle, "Reset Password"),
    (StringName::ResetPasswordSuccess, "Your password has been reset"),
    (StringName::ResetPasswordInvalidToken, "This reset link is invalid or has expired"),
    // Email verification
    (StringName::EmailVerificationVerifying, "Verifying your email..."),
    (StringName::EmailVerificationSuccess, "Your email has been verified"),
    (StringName::EmailVerificationFailed, "Email verification failed"),
    (StringName::EmailVerificationResend, "Resend verification email"),
    // Game
    (StringName::GameCreateGame, "Create Game"),
    (StringName::GameJoinGame, "Join Game"),
    (StringName::GameYourTurn, "It's your turn"),
    (StringName::GameWaitingForChefs, "Waiting for chefs to join..."),
    (StringName::GameMaxChefsTemplate, "Up to {MAX_CHEFS} chefs"),
    (StringName::GameChefNameRequired, "Chef name is required"),
    (StringName::GameBidTemplate, "{NAME} bids {BID}"),
    (StringName::GameWinnerTemplate, "{NAME} wins the game!"),
    // Dashboard
    (StringName::DashboardTitle, "Your Dashboard"),
    (StringName::DashboardGamesCreated, "Games You Created"),
    (StringName::DashboardGamesParticipating, "Games You're Playing"),
    (StringName::DashboardNoGames, "No games yet"),
    // Misc
    (StringName::LanguageUpdateSuccess, "Language updated"),
    (StringName::SplashWelcome, "Welcome to Chili and Cilantro!"),
    (StringName::SplashDescription, "Too many cooks spoil the soup. Bid, bluff, and avoid the chili."),
];
