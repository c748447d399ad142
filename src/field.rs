//! Battle field state shared by both sides of a matchup.

use serde::Deserialize;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Sun,
    Rain,
    Sand,
    Hail,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleFormat {
    #[default]
    Singles,
    Doubles,
}

/// Recognized field options. Unknown keys in the source JSON are ignored
/// rather than rejected.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOptions {
    #[serde(default)]
    pub weather: Option<Weather>,
    #[serde(default)]
    pub is_reflect: bool,
    #[serde(default)]
    pub is_light_screen: bool,
    #[serde(default)]
    pub format: Option<BattleFormat>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Field {
    pub weather: Option<Weather>,
    pub is_reflect: bool,
    pub is_light_screen: bool,
    pub format: BattleFormat,
    pub is_charge: bool,
    pub is_helping_hand: bool,
}

impl Field {
    pub fn from_options(options: &FieldOptions) -> Self {
        Self {
            weather: options.weather,
            is_reflect: options.is_reflect,
            is_light_screen: options.is_light_screen,
            format: options.format.unwrap_or_default(),
            is_charge: false,
            is_helping_hand: false,
        }
    }

    /// The view one side sees: weather plus that side's screen flags.
    pub fn side(&self) -> SideView {
        SideView {
            weather: self.weather,
            is_reflect: self.is_reflect,
            is_light_screen: self.is_light_screen,
            format: self.format,
        }
    }
}

impl From<FieldOptions> for Field {
    fn from(options: FieldOptions) -> Self {
        Self::from_options(&options)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SideView {
    pub weather: Option<Weather>,
    pub is_reflect: bool,
    pub is_light_screen: bool,
    pub format: BattleFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_to_clear_singles() {
        let field = Field::from_options(&FieldOptions::default());
        assert_eq!(field.weather, None);
        assert!(!field.is_reflect);
        assert!(!field.is_light_screen);
        assert_eq!(field.format, BattleFormat::Singles);
    }

    #[test]
    fn unknown_option_keys_are_ignored() {
        let options: FieldOptions =
            serde_json::from_str(r#"{"weather": "sun", "isReflect": true, "gravity": true}"#)
                .unwrap();
        let field = Field::from(options);
        assert_eq!(field.weather, Some(Weather::Sun));
        assert!(field.is_reflect);
    }

    #[test]
    fn side_view_carries_screens_and_weather() {
        let field = Field {
            weather: Some(Weather::Rain),
            is_light_screen: true,
            ..Field::default()
        };
        let side = field.side();
        assert_eq!(side.weather, Some(Weather::Rain));
        assert!(side.is_light_screen);
        assert!(!side.is_reflect);
    }
}
