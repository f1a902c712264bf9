//! Names of every user-facing string.
//!
//! Each name carries a flat key in `section_subsection` form. The nested
//! builder splits keys on every underscore, so no key may be a prefix of
//! another one (`common` cannot coexist with `common_email`).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringName {
    AppTitle,

    CommonCancel,
    CommonChangePassword,
    CommonDashboard,
    CommonEmail,
    CommonGameCode,
    CommonHome,
    CommonLanguage,
    CommonLoading,
    CommonLogout,
    CommonPassword,
    CommonSubmit,
    CommonUnexpectedError,
    CommonUsername,

    LoginTitle,
    LoginLoginButton,
    LoginUseEmail,
    LoginUseUsername,
    LoginUsernameOrEmailRequired,

    RegisterTitle,
    RegisterRegisterButton,
    RegisterSuccess,
    RegisterError,

    ValidationRequired,
    ValidationInvalidEmail,
    ValidationInvalidUsername,
    ValidationPasswordsMustMatch,
    ValidationUsernameMinLengthTemplate,
    ValidationPasswordMinLengthTemplate,
    ValidationInvalidGameCode,

    ChangePasswordSuccess,
    ChangePasswordCurrentPassword,
    ChangePasswordNewPassword,
    ChangePasswordConfirmNewPassword,

    ForgotPasswordTitle,
    ForgotPasswordSendResetLink,
    ForgotPasswordSuccess,

    ResetPasswordTitle,
    ResetPasswordSuccess,
    ResetPasswordInvalidToken,

    EmailVerificationVerifying,
    EmailVerificationSuccess,
    EmailVerificationFailed,
    EmailVerificationResend,

    GameCreateGame,
    GameJoinGame,
    GameYourTurn,
    GameWaitingForChefs,
    GameMaxChefsTemplate,
    GameChefNameRequired,
    GameBidTemplate,
    GameWinnerTemplate,

    DashboardTitle,
    DashboardGamesCreated,
    DashboardGamesParticipating,
    DashboardNoGames,

    LanguageUpdateSuccess,

    SplashWelcome,
    SplashDescription,
}

impl StringName {
    /// Every name, in table order.
    pub const ALL: [StringName; 59] = [
        StringName::AppTitle,
        StringName::CommonCancel,
        StringName::CommonChangePassword,
        StringName::CommonDashboard,
        StringName::CommonEmail,
        StringName::CommonGameCode,
        StringName::CommonHome,
        StringName::CommonLanguage,
        StringName::CommonLoading,
        StringName::CommonLogout,
        StringName::CommonPassword,
        StringName::CommonSubmit,
        StringName::CommonUnexpectedError,
        StringName::CommonUsername,
        StringName::LoginTitle,
        StringName::LoginLoginButton,
        StringName::LoginUseEmail,
        StringName::LoginUseUsername,
        StringName::LoginUsernameOrEmailRequired,
        StringName::RegisterTitle,
        StringName::RegisterRegisterButton,
        StringName::RegisterSuccess,
        StringName::RegisterError,
        StringName::ValidationRequired,
        StringName::ValidationInvalidEmail,
        StringName::ValidationInvalidUsername,
        StringName::ValidationPasswordsMustMatch,
        StringName::ValidationUsernameMinLengthTemplate,
        StringName::ValidationPasswordMinLengthTemplate,
        StringName::ValidationInvalidGameCode,
        StringName::ChangePasswordSuccess,
        StringName::ChangePasswordCurrentPassword,
        StringName::ChangePasswordNewPassword,
        StringName::ChangePasswordConfirmNewPassword,
        StringName::ForgotPasswordTitle,
        StringName::ForgotPasswordSendResetLink,
        StringName::ForgotPasswordSuccess,
        StringName::ResetPasswordTitle,
        StringName::ResetPasswordSuccess,
        StringName::ResetPasswordInvalidToken,
        StringName::EmailVerificationVerifying,
        StringName::EmailVerificationSuccess,
        StringName::EmailVerificationFailed,
        StringName::EmailVerificationResend,
        StringName::GameCreateGame,
        StringName::GameJoinGame,
        StringName::GameYourTurn,
        StringName::GameWaitingForChefs,
        StringName::GameMaxChefsTemplate,
        StringName::GameChefNameRequired,
        StringName::GameBidTemplate,
        StringName::GameWinnerTemplate,
        StringName::DashboardTitle,
        StringName::DashboardGamesCreated,
        StringName::DashboardGamesParticipating,
        StringName::DashboardNoGames,
        StringName::LanguageUpdateSuccess,
        StringName::SplashWelcome,
        StringName::SplashDescription,
    ];

    /// Flat key of this name (e.g. "common_changePassword").
    pub fn as_str(&self) -> &'static str {
        match self {
            StringName::AppTitle => "appTitle",
            StringName::CommonCancel => "common_cancel",
            StringName::CommonChangePassword => "common_changePassword",
            StringName::CommonDashboard => "common_dashboard",
            StringName::CommonEmail => "common_email",
            StringName::CommonGameCode => "common_gameCode",
            StringName::CommonHome => "common_home",
            StringName::CommonLanguage => "common_language",
            StringName::CommonLoading => "common_loading",
            StringName::CommonLogout => "common_logout",
            StringName::CommonPassword => "common_password",
            StringName::CommonSubmit => "common_submit",
            StringName::CommonUnexpectedError => "common_unexpectedError",
            StringName::CommonUsername => "common_username",
            StringName::LoginTitle => "login_title",
            StringName::LoginLoginButton => "login_loginButton",
            StringName::LoginUseEmail => "login_useEmail",
            StringName::LoginUseUsername => "login_useUsername",
            StringName::LoginUsernameOrEmailRequired => "login_usernameOrEmailRequired",
            StringName::RegisterTitle => "register_title",
            StringName::RegisterRegisterButton => "register_registerButton",
            StringName::RegisterSuccess => "register_success",
            StringName::RegisterError => "register_error",
            StringName::ValidationRequired => "validation_required",
            StringName::ValidationInvalidEmail => "validation_invalidEmail",
            StringName::ValidationInvalidUsername => "validation_invalidUsername",
            StringName::ValidationPasswordsMustMatch => "validation_passwordsMustMatch",
            StringName::ValidationUsernameMinLengthTemplate => "validation_usernameMinLengthTemplate",
            StringName::ValidationPasswordMinLengthTemplate => "validation_passwordMinLengthTemplate",
            StringName::ValidationInvalidGameCode => "validation_invalidGameCode",
            StringName::ChangePasswordSuccess => "changePassword_success",
            StringName::ChangePasswordCurrentPassword => "changePassword_currentPassword",
            StringName::ChangePasswordNewPassword => "changePassword_newPassword",
            StringName::ChangePasswordConfirmNewPassword => "changePassword_confirmNewPassword",
            StringName::ForgotPasswordTitle => "forgotPassword_title",
            StringName::ForgotPasswordSendResetLink => "forgotPassword_sendResetLink",
            StringName::ForgotPasswordSuccess => "forgotPassword_success",
            StringName::ResetPasswordTitle => "resetPassword_title",
            StringName::ResetPasswordSuccess => "resetPassword_success",
            StringName::ResetPasswordInvalidToken => "resetPassword_invalidToken",
            StringName::EmailVerificationVerifying => "emailVerification_verifying",
            StringName::EmailVerificationSuccess => "emailVerification_success",
            StringName::EmailVerificationFailed => "emailVerification_failed",
            StringName::EmailVerificationResend => "emailVerification_resend",
            StringName::GameCreateGame => "game_createGame",
            StringName::GameJoinGame => "game_joinGame",
            StringName::GameYourTurn => "game_yourTurn",
            StringName::GameWaitingForChefs => "game_waitingForChefs",
            StringName::GameMaxChefsTemplate => "game_maxChefsTemplate",
            StringName::GameChefNameRequired => "game_chefNameRequired",
            StringName::GameBidTemplate => "game_bidTemplate",
            StringName::GameWinnerTemplate => "game_winnerTemplate",
            StringName::DashboardTitle => "dashboard_title",
            StringName::DashboardGamesCreated => "dashboard_gamesCreated",
            StringName::DashboardGamesParticipating => "dashboard_gamesParticipating",
            StringName::DashboardNoGames => "dashboard_noGames",
            StringName::LanguageUpdateSuccess => "languageUpdate_success",
            StringName::SplashWelcome => "splash_welcome",
            StringName::SplashDescription => "splash_description",
        }
    }

    /// Reverse lookup of a flat key.
    pub fn from_key(key: &str) -> Option<StringName> {
        Self::ALL.into_iter().find(|name| name.as_str() == key)
    }
}

impl AsRef<str> for StringName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StringName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = StringName::ALL.iter().map(|name| name.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), StringName::ALL.len());
    }

    #[test]
    fn test_no_key_is_a_path_prefix_of_another() {
        for name in StringName::ALL {
            let prefix = format!("{}_", name.as_str());
            assert!(
                !StringName::ALL
                    .iter()
                    .any(|other| other.as_str().starts_with(&prefix)),
                "{} is both a leaf and a branch",
                name
            );
        }
    }

    #[test]
    fn test_from_key() {
        assert_eq!(
            StringName::from_key("common_changePassword"),
            Some(StringName::CommonChangePassword)
        );
        assert_eq!(StringName::from_key("Common_ChangePassword"), None);
        assert_eq!(StringName::from_key(""), None);
    }
}
