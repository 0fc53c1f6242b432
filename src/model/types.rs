use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Hole score as marked on the card. `D+` on the card covers double bogey
/// and anything worse.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ScoreResult {
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogeyPlus,
}

impl ScoreResult {
    #[must_use]
    pub fn card_code(&self) -> &'static str {
        match self {
            ScoreResult::Eagle => "E",
            ScoreResult::Birdie => "Ba",
            ScoreResult::Par => "P",
            ScoreResult::Bogey => "Bo",
            ScoreResult::DoubleBogeyPlus => "D+",
        }
    }

    #[must_use]
    pub fn from_card_code(code: &str) -> Option<Self> {
        match code {
            "E" => Some(ScoreResult::Eagle),
            "Ba" => Some(ScoreResult::Birdie),
            "P" => Some(ScoreResult::Par),
            "Bo" => Some(ScoreResult::Bogey),
            "D+" => Some(ScoreResult::DoubleBogeyPlus),
            _ => None,
        }
    }
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScoreResult::Eagle => "Eagle",
            ScoreResult::Birdie => "Birdie",
            ScoreResult::Par => "Par",
            ScoreResult::Bogey => "Bogey",
            ScoreResult::DoubleBogeyPlus => "Double bogey+",
        };
        write!(f, "{s}")
    }
}

/// Uphill/downhill read of the putt line. `UpDown` breaks uphill then
/// downhill, `DownUp` the reverse.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SlopeUpDown {
    Flat,
    Uphill,
    Downhill,
    UpDown,
    DownUp,
}

impl SlopeUpDown {
    pub const ALL: [SlopeUpDown; 5] = [
        SlopeUpDown::Flat,
        SlopeUpDown::Uphill,
        SlopeUpDown::Downhill,
        SlopeUpDown::UpDown,
        SlopeUpDown::DownUp,
    ];

    #[must_use]
    pub fn card_code(&self) -> &'static str {
        match self {
            SlopeUpDown::Flat => "F",
            SlopeUpDown::Uphill => "U",
            SlopeUpDown::Downhill => "D",
            SlopeUpDown::UpDown => "UD",
            SlopeUpDown::DownUp => "DU",
        }
    }

    #[must_use]
    pub fn from_card_code(code: &str) -> Option<Self> {
        match code {
            "F" => Some(SlopeUpDown::Flat),
            "U" => Some(SlopeUpDown::Uphill),
            "D" => Some(SlopeUpDown::Downhill),
            "UD" => Some(SlopeUpDown::UpDown),
            "DU" => Some(SlopeUpDown::DownUp),
            _ => None,
        }
    }
}

impl fmt::Display for SlopeUpDown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SlopeUpDown::Flat => "Flat",
            SlopeUpDown::Uphill => "Uphill",
            SlopeUpDown::Downhill => "Downhill",
            SlopeUpDown::UpDown => "Up then down",
            SlopeUpDown::DownUp => "Down then up",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SlopeLeftRight {
    Straight,
    Left,
    Right,
    LeftRight,
    RightLeft,
}

impl SlopeLeftRight {
    #[must_use]
    pub fn card_code(&self) -> &'static str {
        match self {
            SlopeLeftRight::Straight => "St",
            SlopeLeftRight::Left => "L",
            SlopeLeftRight::Right => "R",
            SlopeLeftRight::LeftRight => "LR",
            SlopeLeftRight::RightLeft => "RL",
        }
    }

    #[must_use]
    pub fn from_card_code(code: &str) -> Option<Self> {
        match code {
            "St" => Some(SlopeLeftRight::Straight),
            "L" => Some(SlopeLeftRight::Left),
            "R" => Some(SlopeLeftRight::Right),
            "LR" => Some(SlopeLeftRight::LeftRight),
            "RL" => Some(SlopeLeftRight::RightLeft),
            _ => None,
        }
    }
}

impl fmt::Display for SlopeLeftRight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SlopeLeftRight::Straight => "Straight",
            SlopeLeftRight::Left => "Left",
            SlopeLeftRight::Right => "Right",
            SlopeLeftRight::LeftRight => "Left then right",
            SlopeLeftRight::RightLeft => "Right then left",
        };
        write!(f, "{s}")
    }
}

/// Mental state at address. The scale is `P` (positive), numeric ratings
/// 1 to 5, then `N` (negative); stored JSON keeps the mixed form, strings
/// for `P`/`N` and bare numbers for the ratings, so serde is hand-written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MentalState {
    Positive,
    One,
    Two,
    Three,
    Four,
    Five,
    Negative,
}

impl MentalState {
    pub const ALL: [MentalState; 7] = [
        MentalState::Positive,
        MentalState::One,
        MentalState::Two,
        MentalState::Three,
        MentalState::Four,
        MentalState::Five,
        MentalState::Negative,
    ];

    #[must_use]
    pub fn card_code(&self) -> &'static str {
        match self {
            MentalState::Positive => "P",
            MentalState::One => "1",
            MentalState::Two => "2",
            MentalState::Three => "3",
            MentalState::Four => "4",
            MentalState::Five => "5",
            MentalState::Negative => "N",
        }
    }

    #[must_use]
    pub fn from_card_code(code: &str) -> Option<Self> {
        match code {
            "P" => Some(MentalState::Positive),
            "1" => Some(MentalState::One),
            "2" => Some(MentalState::Two),
            "3" => Some(MentalState::Three),
            "4" => Some(MentalState::Four),
            "5" => Some(MentalState::Five),
            "N" => Some(MentalState::Negative),
            _ => None,
        }
    }

    #[must_use]
    pub fn rating(&self) -> Option<u8> {
        match self {
            MentalState::One => Some(1),
            MentalState::Two => Some(2),
            MentalState::Three => Some(3),
            MentalState::Four => Some(4),
            MentalState::Five => Some(5),
            MentalState::Positive | MentalState::Negative => None,
        }
    }

    #[must_use]
    pub fn from_rating(rating: u8) -> Option<Self> {
        match rating {
            1 => Some(MentalState::One),
            2 => Some(MentalState::Two),
            3 => Some(MentalState::Three),
            4 => Some(MentalState::Four),
            5 => Some(MentalState::Five),
            _ => None,
        }
    }
}

impl fmt::Display for MentalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MentalState::Positive => "Positive",
            MentalState::Negative => "Negative",
            rated => rated.card_code(),
        };
        write!(f, "{s}")
    }
}

impl Serialize for MentalState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.rating() {
            Some(n) => serializer.serialize_u8(n),
            None => serializer.serialize_str(self.card_code()),
        }
    }
}

struct MentalStateVisitor;

impl Visitor<'_> for MentalStateVisitor {
    type Value = MentalState;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"P\", \"N\", or a rating from 1 to 5")
    }

    fn visit_str<E>(self, v: &str) -> Result<MentalState, E>
    where
        E: de::Error,
    {
        MentalState::from_card_code(v)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_u64<E>(self, v: u64) -> Result<MentalState, E>
    where
        E: de::Error,
    {
        u8::try_from(v)
            .ok()
            .and_then(MentalState::from_rating)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E>(self, v: i64) -> Result<MentalState, E>
    where
        E: de::Error,
    {
        u8::try_from(v)
            .ok()
            .and_then(MentalState::from_rating)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
    }
}

impl<'de> Deserialize<'de> for MentalState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MentalStateVisitor)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    Sunny,
    Cloudy,
    Rainy,
    Windy,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WindSpeed {
    Calm,
    Light,
    Moderate,
    Strong,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoundType {
    Competition,
    ClubCompetition,
    Private,
    Practice,
}

/// Scoring format of a competition round; non-competition rounds keep
/// whatever the card was printed with, stroke play in practice.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionFormat {
    Stroke,
    Match,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GrassType {
    Bent,
    Korai,
    Bermuda,
    Other,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GreenCondition {
    Excellent,
    Good,
    Fair,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PutterRank {
    #[serde(rename = "ace")]
    Ace,
    #[serde(rename = "2nd")]
    Second,
    #[serde(rename = "3rd")]
    Third,
    #[serde(rename = "4th")]
    Fourth,
    #[serde(rename = "5th")]
    Fifth,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mental_state_serializes_mixed() {
        assert_eq!(serde_json::to_string(&MentalState::Positive).unwrap(), "\"P\"");
        assert_eq!(serde_json::to_string(&MentalState::Three).unwrap(), "3");
        assert_eq!(serde_json::to_string(&MentalState::Negative).unwrap(), "\"N\"");
    }

    #[test]
    fn mental_state_deserializes_strings_and_numbers() {
        assert_eq!(
            serde_json::from_str::<MentalState>("\"P\"").unwrap(),
            MentalState::Positive
        );
        assert_eq!(
            serde_json::from_str::<MentalState>("5").unwrap(),
            MentalState::Five
        );
        assert_eq!(
            serde_json::from_str::<MentalState>("\"2\"").unwrap(),
            MentalState::Two
        );
        assert!(serde_json::from_str::<MentalState>("\"X\"").is_err());
        assert!(serde_json::from_str::<MentalState>("6").is_err());
    }

    #[test]
    fn card_codes_round_trip() {
        for slope in SlopeUpDown::ALL {
            assert_eq!(SlopeUpDown::from_card_code(slope.card_code()), Some(slope));
        }
        assert_eq!(ScoreResult::from_card_code("D+"), Some(ScoreResult::DoubleBogeyPlus));
        assert_eq!(SlopeLeftRight::from_card_code("St"), Some(SlopeLeftRight::Straight));
        assert_eq!(ScoreResult::from_card_code("???"), None);
    }

    #[test]
    fn round_enums_serialize_stored_values() {
        assert_eq!(serde_json::to_string(&WindSpeed::Calm).unwrap(), "\"calm\"");
        assert_eq!(
            serde_json::to_string(&WindSpeed::Moderate).unwrap(),
            "\"moderate\""
        );
        assert_eq!(
            serde_json::to_string(&RoundType::ClubCompetition).unwrap(),
            "\"club_competition\""
        );
        assert_eq!(
            serde_json::to_string(&RoundType::Private).unwrap(),
            "\"private\""
        );
        assert_eq!(
            serde_json::to_string(&CompetitionFormat::Match).unwrap(),
            "\"match\""
        );
        assert!(serde_json::from_str::<GreenCondition>("\"poor\"").is_err());
    }
}
