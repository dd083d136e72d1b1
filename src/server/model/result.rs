//! Result lists returned by mutation endpoints.

use crate::model::api::ResultDto;

/// Outcome of one step of a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
}

impl ActionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Picks the success or failure message of `messages` depending on `success`.
    pub fn from_outcome(success: bool, messages: ResultMessage) -> Self {
        if success {
            Self::ok(messages.success)
        } else {
            Self::fail(messages.failure)
        }
    }

    pub fn into_dto(self) -> ResultDto {
        ResultDto {
            success: self.success,
            message: self.message,
        }
    }
}

/// Converts a result list for the JSON response.
pub fn into_dtos(results: Vec<ActionResult>) -> Vec<ResultDto> {
    results.into_iter().map(ActionResult::into_dto).collect()
}

/// Pair of user-facing messages for one kind of mutation.
#[derive(Debug, Clone, Copy)]
pub struct ResultMessage {
    pub success: &'static str,
    pub failure: &'static str,
}

pub const CREATE_POST: ResultMessage = ResultMessage {
    success: "inlägget skapades",
    failure: "inlägget kunde inte skapas",
};

pub const UPDATE_POST: ResultMessage = ResultMessage {
    success: "inlägget uppdaterades",
    failure: "inlägget kunde inte uppdateras",
};

pub const DELETE_POST: ResultMessage = ResultMessage {
    success: "inlägget togs bort",
    failure: "inlägget kunde inte tas bort",
};

pub const SCISSOR_POST: ResultMessage = ResultMessage {
    success: "inlägget saxades",
    failure: "inlägget kunde inte saxas",
};

pub const SAVE_POST: ResultMessage = ResultMessage {
    success: "inlägget sparades",
    failure: "inlägget kunde inte sparas",
};

pub const CREATE_URL_TIP: ResultMessage = ResultMessage {
    success: "tipset sparades",
    failure: "tipset kunde inte sparas",
};

pub const CONNECT_LINEUP: ResultMessage = ResultMessage {
    success: "startelvan kopplades till inlägget",
    failure: "startelvan kunde inte kopplas till inlägget",
};

pub const CREATE_VOTE: ResultMessage = ResultMessage {
    success: "rösten sparades",
    failure: "rösten kunde inte sparas",
};

pub const CREATE_FAVORITE_PLAYER: ResultMessage = ResultMessage {
    success: "favoritspelaren sparades",
    failure: "favoritspelaren kunde inte sparas",
};

pub const DELETE_FAVORITE_PLAYER: ResultMessage = ResultMessage {
    success: "favoritspelaren togs bort",
    failure: "favoritspelaren kunde inte tas bort",
};

pub const SECLUDE_USER: ResultMessage = ResultMessage {
    success: "användaren spärrades",
    failure: "användaren kunde inte spärras",
};

pub const CREATE_NICK: ResultMessage = ResultMessage {
    success: "nicket sparades",
    failure: "nicket kunde inte sparas",
};

pub const UPDATE_BIO: ResultMessage = ResultMessage {
    success: "bion uppdaterades",
    failure: "bion kunde inte uppdateras",
};

pub const UPDATE_REGION: ResultMessage = ResultMessage {
    success: "området uppdaterades",
    failure: "området kunde inte uppdateras",
};

pub const UPDATE_AVATAR: ResultMessage = ResultMessage {
    success: "profilbilden uppdaterades",
    failure: "profilbilden kunde inte uppdateras",
};

pub const UPDATE_ROLES: ResultMessage = ResultMessage {
    success: "rollerna uppdaterades",
    failure: "rollerna kunde inte uppdateras",
};

pub const RESET_PASSWORD: ResultMessage = ResultMessage {
    success: "lösenordet ändrades",
    failure: "lösenordet kunde inte ändras",
};

pub const CREATE_INVITE: ResultMessage = ResultMessage {
    success: "inbjudan skapades",
    failure: "inbjudan kunde inte skapas",
};

pub const UPDATE_FILTER: ResultMessage = ResultMessage {
    success: "filtret sparades",
    failure: "filtret kunde inte sparas",
};

pub const CREATE_PM: ResultMessage = ResultMessage {
    success: "pm skickades",
    failure: "pm kunde inte skickas",
};

pub const CREATE_PLAYER: ResultMessage = ResultMessage {
    success: "spelaren skapades",
    failure: "spelaren kunde inte skapas",
};

pub const UPDATE_PLAYER: ResultMessage = ResultMessage {
    success: "spelaren uppdaterades",
    failure: "spelaren kunde inte uppdateras",
};

pub const CREATE_GAME: ResultMessage = ResultMessage {
    success: "matchen skapades",
    failure: "matchen kunde inte skapas",
};

pub const CREATE_TITLE: ResultMessage = ResultMessage {
    success: "titeln skapades",
    failure: "titeln kunde inte skapas",
};

pub const CREATE_POLL: ResultMessage = ResultMessage {
    success: "omröstningen skapades",
    failure: "omröstningen kunde inte skapas",
};

pub const CREATE_POLL_VOTE: ResultMessage = ResultMessage {
    success: "rösten registrerades",
    failure: "rösten kunde inte registreras",
};

pub const CREATE_CHRONICLE: ResultMessage = ResultMessage {
    success: "krönikan skapades",
    failure: "krönikan kunde inte skapas",
};

pub const UPDATE_CHRONICLE: ResultMessage = ResultMessage {
    success: "krönikan uppdaterades",
    failure: "krönikan kunde inte uppdateras",
};

pub const CREATE_REGION: ResultMessage = ResultMessage {
    success: "området skapades",
    failure: "området kunde inte skapas",
};

pub const NICK_TAKEN: &str = "nicket finns redan registrerat";
pub const REGION_EXISTS: &str = "Det här området existerar redan";
pub const EMPTY_PM: &str = "pm får inte vara tomt";
pub const EMPTY_POST: &str = "inlägget får inte vara tomt";
pub const ALREADY_VOTED: &str = "du har redan röstat på det här inlägget";
pub const OWN_POST_VOTE: &str = "du kan inte rösta på ditt eget inlägg";
pub const ALREADY_VOTED_POLL: &str = "du har redan röstat i den här omröstningen";
pub const SLUG_TAKEN: &str = "det finns redan en sida med den titeln";
pub const EMPTY_NICK: &str = "nicket får inte vara tomt";
pub const EMPTY_NAME: &str = "namnet får inte vara tomt";
pub const EMPTY_TITLE: &str = "titeln får inte vara tom";
pub const INVALID_URL_TIP: &str = "tipset måste vara en http- eller https-länk";
pub const INVALID_POSTS_PER_PAGE: &str = "antal inlägg per sida måste vara mellan 1 och 100";
pub const TOO_MANY_FILTER_USERS: &str = "filtret kan högst innehålla 200 användare per lista";
pub const INVALID_EMAIL: &str = "ogiltig email";
pub const ACCOUNT_EXISTS: &str = "det finns redan ett konto med den emailen";
pub const NO_INVITE: &str = "det finns ingen inbjudan för den emailen";
pub const PASSWORDS_DIFFER: &str = "lösenorden matchar inte";
pub const PASSWORD_TOO_SHORT: &str = "lösenordet måste vara minst 8 tecken";
pub const TOO_FEW_ALTERNATIVES: &str = "en omröstning behöver minst två alternativ";
pub const INVALID_POSITION: &str = "positionen finns inte";
pub const UNKNOWN_ALTERNATIVE: &str = "alternativet hör inte till omröstningen";
pub const UNSUPPORTED_IMAGE: &str = "filtypen stöds inte";
pub const EMPTY_IMAGE: &str = "filen är tom";
pub const IMAGE_TOO_LARGE: &str = "bilden är för stor";

pub const USER_NOT_FOUND: &str = "användaren finns inte";
pub const POST_NOT_FOUND: &str = "inlägget finns inte";
pub const PARENT_NOT_FOUND: &str = "inlägget du svarar på finns inte";
pub const TIP_NOT_FOUND: &str = "tipset finns inte";
pub const PLAYER_NOT_FOUND: &str = "spelaren finns inte";
pub const LINEUP_NOT_FOUND: &str = "startelvan finns inte";
pub const FORMATION_NOT_FOUND: &str = "formationen finns inte";
pub const REGION_NOT_FOUND: &str = "området finns inte";
pub const POLL_NOT_FOUND: &str = "omröstningen finns inte";
pub const CHRONICLE_NOT_FOUND: &str = "krönikan finns inte";

pub fn invite_exists(email: &str) -> String {
    format!("det finns redan en inbjudan på email {}", email)
}
