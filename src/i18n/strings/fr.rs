use crate::i18n::StringName;

/// French strings.
pub const FR_STRINGS: &[(StringName, &str)] = &[
    (StringName::AppTitle, "Piment et Coriandre"),
    // Common
    (StringName::CommonCancel, "Annuler"),
    (StringName::CommonChangePassword, "Changer le mot de passe"),
    (StringName::CommonDashboard, "Tableau de bord"),
    (StringName::CommonEmail, "E-mail"),
    (StringName::CommonGameCode, "Code de la partie"),
    (StringName::CommonHome, "Accueil"),
    (StringName::CommonLanguage, "Langue"),
    (StringName::CommonLoading, "Chargement..."),
    (StringName::CommonLogout, "Se déconnecter"),
    (StringName::CommonPassword, "Mot de passe"),
    (StringName::CommonSubmit, "Soumettre"),
    (StringName::CommonUnexpectedError, "Une erreur inattendue s'est produite"),
    (StringName::CommonUsername, "Nom d'utilisateur"),
    // Login
    (StringName::LoginTitle, "Connexion"),
    (StringName::LoginLoginButton, "Se connecter"),
    (StringName::LoginUseEmail, "Utiliser l'e-mail"),
    (StringName::LoginUseUsername, "Utiliser le nom d'utilisateur"),
    (StringName::LoginUsernameOrEmailRequired, "Un nom d'utilisateur ou un e-mail est requis"),
    // Registration
    (StringName::RegisterTitle, "Inscription"),
    (StringName::RegisterRegisterButton, "S'inscrire"),
    (StringName::RegisterSuccess, "Inscription réussie ! Veuillez vérifier votre e-mail pour activer votre compte."),
    (StringName::RegisterError, "Une erreur s'est produite lors de l'inscription"),
    // Validation
    (StringName::ValidationRequired, "Ce champ est obligatoire"),
    (StringName::ValidationInvalidEmail, "Adresse e-mail invalide"),
    (StringName::ValidationInvalidUsername, "Le nom d'utilisateur ne peut contenir que des lettres, des chiffres, des tirets et des traits de soulignement"),
    (StringName::ValidationPasswordsMustMatch, "Les mots de passe doivent correspondre"),
    (StringName::ValidationUsernameMinLengthTemplate, "Le nom d'utilisateur doit contenir au moins {MIN_USERNAME_LENGTH} caractères"),
    (StringName::ValidationPasswordMinLengthTemplate, "Le mot de passe doit contenir au moins {MIN_PASSWORD_LENGTH} caractères"),
    (StringName::ValidationInvalidGameCode, "Code de partie invalide"),
    // Change password
    (StringName::ChangePasswordSuccess, "Votre mot de passe a été modifié"),
    (StringName::ChangePasswordCurrentPassword, "Mot de passe actuel"),
    (StringName::ChangePasswordNewPassword, "Nouveau mot de passe"),
    (StringName::ChangePasswordConfirmNewPassword, "Confirmer le nouveau mot de passe"),
    // Forgot / reset password
    (StringName::ForgotPasswordTitle, "Mot de passe oublié"),
    (StringName::ForgotPasswordSendResetLink, "Envoyer le lien de réinitialisation"),
    (StringName::ForgotPasswordSuccess, "Si un compte existe avec cet e-mail, un lien de réinitialisation a été envoyé"),
    (StringName::ResetPasswordTitle, "Réinitialiser le mot de passe"),
    (StringName::ResetPasswordSuccess, "Votre mot de passe a été réinitialisé"),
    (StringName::ResetPasswordInvalidToken, "Ce lien de réinitialisation est invalide ou a expiré"),
    // Email verification
    (StringName::EmailVerificationVerifying, "Vérification de votre e-mail..."),
    (StringName::EmailVerificationSuccess, "Votre e-mail a été vérifié"),
    (StringName::EmailVerificationFailed, "La vérification de l'e-mail a échoué"),
    (StringName::EmailVerificationResend, "Renvoyer l'e-mail de vérification"),
    // Game
    (StringName::GameCreateGame, "Créer une partie"),
    (StringName::GameJoinGame, "Rejoindre une partie"),
    (StringName::GameYourTurn, "C'est votre tour"),
    (StringName::GameWaitingForChefs, "En attente des chefs..."),
    (StringName::GameMaxChefsTemplate, "Jusqu'à {MAX_CHEFS} chefs"),
    (StringName::GameChefNameRequired, "Le nom du chef est requis"),
    (StringName::GameBidTemplate, "{NAME} enchérit {BID}"),
    (StringName::GameWinnerTemplate, "{NAME} remporte la partie !"),
    // Dashboard
    (StringName::DashboardTitle, "Votre tableau de bord"),
    (StringName::DashboardGamesCreated, "Parties créées"),
    (StringName::DashboardGamesParticipating, "Parties en cours"),
    (StringName::DashboardNoGames, "Aucune partie pour l'instant"),
    // Misc
    (StringName::LanguageUpdateSuccess, "Langue mise à jour"),
    (StringName::SplashWelcome, "Bienvenue dans Piment et Coriandre !"),
    (StringName::SplashDescription, "Trop de cuisiniers gâtent la sauce. Enchérissez, bluffez et évitez le piment."),
];
