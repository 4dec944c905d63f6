use std::borrow::Cow;

use fitplan_core::model::{GeminiModel, Model};

pub const GEMINI_1_5_PRO: &str = "gemini-1.5-pro";
pub const GEMINI_1_5_FLASH: &str = "gemini-1.5-flash";
pub const GEMINI_2_0_FLASH: &str = "gemini-2.0-flash";
pub const GEMINI_2_5_FLASH: &str = "gemini-2.5-flash";
pub const GEMINI_2_5_PRO: &str = "gemini-2.5-pro";

/// Gemini's name for `model`. Every [`Model`] variant maps today; the
/// `Option` leaves room for providers the backend cannot serve.
pub fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    let gemini_model = match model {
        Model::Custom(custom) => return Some(Cow::Borrowed(*custom)),
        Model::Gemini(gemini_model) => gemini_model,
    };

    let name = match gemini_model {
        GeminiModel::Gemini15Pro => GEMINI_1_5_PRO,
        GeminiModel::Gemini15Flash => GEMINI_1_5_FLASH,
        GeminiModel::Gemini20Flash => GEMINI_2_0_FLASH,
        GeminiModel::Gemini25Flash => GEMINI_2_5_FLASH,
        GeminiModel::Gemini25Pro => GEMINI_2_5_PRO,
    };
    Some(name.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_builtin_and_custom() {
        assert_eq!(
            map_model(&Model::Gemini(GeminiModel::Gemini15Pro)).as_deref(),
            Some("gemini-1.5-pro")
        );
        assert_eq!(
            map_model(&Model::Custom("gemini-exp-1206")).as_deref(),
            Some("gemini-exp-1206")
        );
    }
}
