use crate::core::colour::kinds::ColourMapKinds;
use crate::core::colour::map::ColourMap;
use crate::core::colour::maps::channel_interleave::ChannelInterleave;
use crate::core::colour::maps::green_banding::GreenBanding;

#[must_use]
pub fn colour_map_factory(kind: ColourMapKinds) -> Box<dyn ColourMap> {
    match kind {
        ColourMapKinds::GreenBanding => Box::new(GreenBanding),
        ColourMapKinds::ChannelInterleave => Box::new(ChannelInterleave),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(ColourMapKinds::ALL.first(), Some(&ColourMapKinds::default()));
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in ColourMapKinds::ALL {
            let map = colour_map_factory(kind);
            assert_eq!(map.kind(), kind);
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = ColourMapKinds::ALL.iter().map(|k| k.display_name()).collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
