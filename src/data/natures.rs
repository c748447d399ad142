use crate::stats::Stat;

/// One row of the nature table: the raised and lowered stat, or neither for
/// the five neutral natures.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NatureData {
    pub plus: Option<Stat>,
    pub minus: Option<Stat>,
}

const fn nature(plus: Option<Stat>, minus: Option<Stat>) -> NatureData {
    NatureData { plus, minus }
}

pub static NATURES: phf::Map<&'static str, NatureData> = phf::phf_map! {
    "hardy" => nature(None, None),
    "lonely" => nature(Some(Stat::Atk), Some(Stat::Def)),
    "brave" => nature(Some(Stat::Atk), Some(Stat::Spe)),
    "adamant" => nature(Some(Stat::Atk), Some(Stat::Spa)),
    "naughty" => nature(Some(Stat::Atk), Some(Stat::Spd)),
    "bold" => nature(Some(Stat::Def), Some(Stat::Atk)),
    "docile" => nature(None, None),
    "relaxed" => nature(Some(Stat::Def), Some(Stat::Spe)),
    "impish" => nature(Some(Stat::Def), Some(Stat::Spa)),
    "lax" => nature(Some(Stat::Def), Some(Stat::Spd)),
    "timid" => nature(Some(Stat::Spe), Some(Stat::Atk)),
    "hasty" => nature(Some(Stat::Spe), Some(Stat::Def)),
    "serious" => nature(None, None),
    "jolly" => nature(Some(Stat::Spe), Some(Stat::Spa)),
    "naive" => nature(Some(Stat::Spe), Some(Stat::Spd)),
    "modest" => nature(Some(Stat::Spa), Some(Stat::Atk)),
    "mild" => nature(Some(Stat::Spa), Some(Stat::Def)),
    "quiet" => nature(Some(Stat::Spa), Some(Stat::Spe)),
    "bashful" => nature(None, None),
    "rash" => nature(Some(Stat::Spa), Some(Stat::Spd)),
    "calm" => nature(Some(Stat::Spd), Some(Stat::Atk)),
    "gentle" => nature(Some(Stat::Spd), Some(Stat::Def)),
    "sassy" => nature(Some(Stat::Spd), Some(Stat::Spe)),
    "careful" => nature(Some(Stat::Spd), Some(Stat::Spa)),
    "quirky" => nature(None, None),
};
