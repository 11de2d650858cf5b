use crate::{CaptainBraindead, ColonelArchBtw, GeneralClever, MajorDaft, StrategicModule};

/// Construct a strategic module by name. Used by scenario setup code that
/// names a general as configuration data rather than linking a concrete
/// type — the outer selection surface (CLI flag, config file key, …) is not
/// this crate's concern.
pub fn by_name(name: &str) -> Option<Box<dyn StrategicModule>> {
    match name {
        "CaptainBraindead" => Some(Box::new(CaptainBraindead)),
        "MajorDaft" => Some(Box::new(MajorDaft)),
        "ColonelArchBtw" => Some(Box::new(ColonelArchBtw)),
        "GeneralClever" => Some(Box::new(GeneralClever::default())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_name_resolves() {
        for name in ["CaptainBraindead", "MajorDaft", "ColonelArchBtw", "GeneralClever"] {
            assert!(by_name(name).is_some(), "{name} should resolve");
        }
    }

    #[test]
    fn unknown_name_resolves_to_none() {
        assert!(by_name("SergeantNonexistent").is_none());
    }
}
