/// Formation names mapped to the SPA component that draws them.
const FORMATIONS: [(&str, &str); 5] = [
    ("4-4-2", "FourFourTwo"),
    ("4-3-3", "FourThreeThree"),
    ("4-5-1", "FourFiveOne"),
    ("3-5-2", "ThreeFiveTwo"),
    ("4-2-3-1", "FourTwoThreeOne"),
];

/// UI component for a formation, `None` for formations the client can't draw.
pub fn component_name(formation_name: &str) -> Option<&'static str> {
    FORMATIONS
        .iter()
        .find(|(name, _)| *name == formation_name)
        .map(|(_, component)| *component)
}
