//! Display labels for the game enums.
//!
//! Every function is an exhaustive match over language and value, so adding a
//! variant or a language without labels does not compile.

use crate::enumerations::{ActionType, CardType, GamePhase, TurnAction};
use crate::i18n::StringLanguage;

pub fn action_type_label(value: ActionType, language: StringLanguage) -> &'static str {
    use ActionType::*;
    match language {
        StringLanguage::EnglishUS | StringLanguage::EnglishUK => match value {
            CreateGame => "Create Game",
            EndGame => "End Game",
            EndRound => "End Round",
            ExpireGame => "Game Expired",
            FlipCard => "Flip Card",
            JoinGame => "Join Game",
            MakeBid => "Make Bid",
            Message => "Message",
            Pass => "Pass",
            PlaceCard => "Place Card",
            QuitGame => "Quit Game",
            StartBidding => "Start Bidding",
            StartGame => "Start Game",
            StartNewRound => "Start New Round",
        },
        StringLanguage::French => match value {
            CreateGame => "Créer une partie",
            EndGame => "Fin de la partie",
            EndRound => "Fin du tour",
            ExpireGame => "Partie expirée",
            FlipCard => "Retourner une carte",
            JoinGame => "Rejoindre la partie",
            MakeBid => "Faire une enchère",
            Message => "Message",
            Pass => "Passer",
            PlaceCard => "Placer une carte",
            QuitGame => "Quitter la partie",
            StartBidding => "Commencer les enchères",
            StartGame => "Commencer la partie",
            StartNewRound => "Commencer un nouveau tour",
        },
        StringLanguage::MandarinChinese => match value {
            CreateGame => "创建游戏",
            EndGame => "结束游戏",
            EndRound => "结束回合",
            ExpireGame => "游戏已过期",
            FlipCard => "翻牌",
            JoinGame => "加入游戏",
            MakeBid => "出价",
            Message => "消息",
            Pass => "跳过",
            PlaceCard => "放置卡牌",
            QuitGame => "退出游戏",
            StartBidding => "开始竞价",
            StartGame => "开始游戏",
            StartNewRound => "开始新回合",
        },
        StringLanguage::Spanish => match value {
            CreateGame => "Crear juego",
            EndGame => "Terminar juego",
            EndRound => "Terminar ronda",
            ExpireGame => "Juego expirado",
            FlipCard => "Voltear carta",
            JoinGame => "Unirse al juego",
            MakeBid => "Hacer apuesta",
            Message => "Mensaje",
            Pass => "Pasar",
            PlaceCard => "Colocar carta",
            QuitGame => "Abandonar juego",
            StartBidding => "Comenzar apuestas",
            StartGame => "Comenzar juego",
            StartNewRound => "Comenzar nueva ronda",
        },
        StringLanguage::Ukrainian => match value {
            CreateGame => "Створити гру",
            EndGame => "Завершити гру",
            EndRound => "Завершити раунд",
            ExpireGame => "Гра прострочена",
            FlipCard => "Перевернути карту",
            JoinGame => "Приєднатися до гри",
            MakeBid => "Зробити ставку",
            Message => "Повідомлення",
            Pass => "Пас",
            PlaceCard => "Покласти карту",
            QuitGame => "Вийти з гри",
            StartBidding => "Почати торги",
            StartGame => "Почати гру",
            StartNewRound => "Почати новий раунд",
        },
    }
}

pub fn card_type_label(value: CardType, language: StringLanguage) -> &'static str {
    match (language, value) {
        (StringLanguage::EnglishUS, CardType::Chili) => "Chili",
        (StringLanguage::EnglishUK, CardType::Chili) => "Chilli",
        (StringLanguage::EnglishUS | StringLanguage::EnglishUK, CardType::Cilantro) => "Cilantro",
        (StringLanguage::French, CardType::Chili) => "Piment",
        (StringLanguage::French, CardType::Cilantro) => "Coriandre",
        (StringLanguage::MandarinChinese, CardType::Chili) => "辣椒",
        (StringLanguage::MandarinChinese, CardType::Cilantro) => "香菜",
        (StringLanguage::Spanish, CardType::Chili) => "Chile",
        (StringLanguage::Spanish, CardType::Cilantro) => "Cilantro",
        (StringLanguage::Ukrainian, CardType::Chili) => "Чилі",
        (StringLanguage::Ukrainian, CardType::Cilantro) => "Коріандр",
    }
}

pub fn game_phase_label(value: GamePhase, language: StringLanguage) -> &'static str {
    use GamePhase::*;
    match language {
        StringLanguage::EnglishUS | StringLanguage::EnglishUK => match value {
            Lobby => "Lobby",
            Setup => "Setup",
            Bidding => "Bidding",
            Reveal => "Reveal",
            GameOver => "Game Over",
        },
        StringLanguage::French => match value {
            Lobby => "Salon",
            Setup => "Préparation",
            Bidding => "Enchères",
            Reveal => "Révélation",
            GameOver => "Partie terminée",
        },
        StringLanguage::MandarinChinese => match value {
            Lobby => "大厅",
            Setup => "准备",
            Bidding => "竞价",
            Reveal => "揭示",
            GameOver => "游戏结束",
        },
        StringLanguage::Spanish => match value {
            Lobby => "Sala de espera",
            Setup => "Preparación",
            Bidding => "Apuestas",
            Reveal => "Revelación",
            GameOver => "Fin del juego",
        },
        StringLanguage::Ukrainian => match value {
            Lobby => "Лобі",
            Setup => "Підготовка",
            Bidding => "Торги",
            Reveal => "Розкриття",
            GameOver => "Гра завершена",
        },
    }
}

pub fn turn_action_label(value: TurnAction, language: StringLanguage) -> &'static str {
    use TurnAction::*;
    match language {
        StringLanguage::EnglishUS | StringLanguage::EnglishUK => match value {
            PlaceCard => "Place Card",
            Bid => "Bid",
            IncreaseBid => "Increase Bid",
            Pass => "Pass",
            Flip => "Flip",
        },
        StringLanguage::French => match value {
            PlaceCard => "Placer une carte",
            Bid => "Enchérir",
            IncreaseBid => "Surenchérir",
            Pass => "Passer",
            Flip => "Retourner",
        },
        StringLanguage::MandarinChinese => match value {
            PlaceCard => "放置卡牌",
            Bid => "出价",
            IncreaseBid => "加价",
            Pass => "跳过",
            Flip => "翻牌",
        },
        StringLanguage::Spanish => match value {
            PlaceCard => "Colocar carta",
            Bid => "Apostar",
            IncreaseBid => "Subir apuesta",
            Pass => "Pasar",
            Flip => "Voltear",
        },
        StringLanguage::Ukrainian => match value {
            PlaceCard => "Покласти карту",
            Bid => "Ставка",
            IncreaseBid => "Підвищити ставку",
            Pass => "Пас",
            Flip => "Перевернути",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_variants_differ_only_where_spelling_does() {
        assert_eq!(card_type_label(CardType::Chili, StringLanguage::EnglishUS), "Chili");
        assert_eq!(card_type_label(CardType::Chili, StringLanguage::EnglishUK), "Chilli");
        assert_eq!(
            action_type_label(ActionType::Pass, StringLanguage::EnglishUS),
            action_type_label(ActionType::Pass, StringLanguage::EnglishUK)
        );
    }

    #[test]
    fn test_spot_check_translations() {
        assert_eq!(action_type_label(ActionType::Pass, StringLanguage::French), "Passer");
        assert_eq!(game_phase_label(GamePhase::GameOver, StringLanguage::MandarinChinese), "游戏结束");
        assert_eq!(turn_action_label(TurnAction::IncreaseBid, StringLanguage::Spanish), "Subir apuesta");
        assert_eq!(card_type_label(CardType::Cilantro, StringLanguage::Ukrainian), "Коріандр");
    }
}
