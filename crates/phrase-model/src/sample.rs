use crate::group::{Group, Variation};

/// A small collection used for previews and as the default starting point of
/// the command-line host.
pub fn sample_groups() -> Vec<Group> {
    vec![
        Group::with_variations(
            "Color",
            vec![
                Variation::new("Green", 0.3),
                Variation::new("Red", 0.4),
                Variation::new("Black", 0.3),
            ],
        ),
        Group::with_variations(
            "Style",
            vec![
                Variation::new("Van Gog", 0.2),
                Variation::new("Realism", 0.45),
                Variation::new("Futurism", 0.35),
            ],
        ),
    ]
}
