use crate::i18n::StringName;

/// Mandarin Chinese (Simplified) strings.
pub const ZH_CN_STRINGS: &[(StringName, &str)] = &[
    (StringName::AppTitle, "辣椒与香菜"),
    // Common
    (StringName::CommonCancel, "取消"),
    (StringName::CommonChangePassword, "修改密码"),
    (StringName::CommonDashboard, "仪表板"),
    (StringName::CommonEmail, "电子邮件"),
    (StringName::CommonGameCode, "游戏代码"),
    (StringName::CommonHome, "首页"),
    (StringName::CommonLanguage, "语言"),
    (StringName::CommonLoading, "加载中..."),
    (StringName::CommonLogout, "登出"),
    (StringName::CommonPassword, "密码"),
    (StringName::CommonSubmit, "提交"),
    (StringName::CommonUnexpectedError, "发生意外错误"),
    (StringName::CommonUsername, "用户名"),
    // Login
    (StringName::LoginTitle, "登录"),
    (StringName::LoginLoginButton, "登录"),
    (StringName::LoginUseEmail, "改用电子邮件"),
    (StringName::LoginUseUsername, "改用用户名"),
    (StringName::LoginUsernameOrEmailRequired, "需要用户名或电子邮件"),
    // Registration
    (StringName::RegisterTitle, "注册"),
    (StringName::RegisterRegisterButton, "注册"),
    (StringName::RegisterSuccess, "注册成功！请检查您的电子邮件以验证您的帐户。"),
    (StringName::RegisterError, "注册时发生错误"),
    // Validation
    (StringName::ValidationRequired, "此字段为必填项"),
    (StringName::ValidationInvalidEmail, "无效的电子邮件地址"),
    (StringName::ValidationInvalidUsername, "用户名只能包含字母、数字、下划线和连字符"),
    (StringName::ValidationPasswordsMustMatch, "密码必须匹配"),
    (StringName::ValidationUsernameMinLengthTemplate, "用户名长度至少为 {MIN_USERNAME_LENGTH} 个字符"),
    (StringName::ValidationPasswordMinLengthTemplate, "密码长度至少为 {MIN_PASSWORD_LENGTH} 个字符"),
    (StringName::ValidationInvalidGameCode, "无效的游戏代码"),
    // Change password
    (StringName::ChangePasswordSuccess, "您的密码已修改"),
    (StringName::ChangePasswordCurrentPassword, "当前密码"),
    (StringName::ChangePasswordNewPassword, "新密码"),
    (StringName::ChangePasswordConfirmNewPassword, "确认新密码"),
    // Forgot / reset password
    (StringName::ForgotPasswordTitle, "忘记密码"),
    (StringName::ForgotPasswordSendResetLink, "发送重置链接"),
    (StringName::ForgotPasswordSuccess, "如果该电子邮件对应的帐户存在，密码重置链接已发送"),
    (StringName::ResetPasswordTitle, "重置密码"),
    (StringName::ResetPasswordSuccess, "您的密码已重置"),
    (StringName::ResetPasswordInvalidToken, "此重置链接无效或已过期"),
    // Email verification
    (StringName::EmailVerificationVerifying, "正在验证您的电子邮件..."),
    (StringName::EmailVerificationSuccess, "您的电子邮件已验证"),
    (StringName::EmailVerificationFailed, "电子邮件验证失败"),
    (StringName::EmailVerificationResend, "重新发送验证邮件"),
    // Game
    (StringName::GameCreateGame, "创建游戏"),
    (StringName::GameJoinGame, "加入游戏"),
    (StringName::GameYourTurn, "轮到你了"),
    (StringName::GameWaitingForChefs, "等待厨师加入..."),
    (StringName::GameMaxChefsTemplate, "最多 {MAX_CHEFS} 位厨师"),
    (StringName::GameChefNameRequired, "厨师名称为必填项"),
    (StringName::GameBidTemplate, "{NAME} 出价 {BID}"),
    (StringName::GameWinnerTemplate, "{NAME} 赢得了游戏！"),
    // Dashboard
    (StringName::DashboardTitle, "您的仪表板"),
    (StringName::DashboardGamesCreated, "您创建的游戏"),
    (StringName::DashboardGamesParticipating, "您参与的游戏"),
    (StringName::DashboardNoGames, "暂无游戏"),
    // Misc
    (StringName::LanguageUpdateSuccess, "语言已更新"),
    (StringName::SplashWelcome, "欢迎来到辣椒与香菜！"),
    (StringName::SplashDescription, "厨师太多烧坏汤。出价、虚张声势，并避开辣椒。"),
];
