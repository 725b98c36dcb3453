/// Colour policy for a whole run; chosen at startup, never per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandelbrotColourMapKinds {
    #[default]
    HueRamp,
    AlphaRamp,
}

impl MandelbrotColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::HueRamp, Self::AlphaRamp];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::HueRamp => "Hue ramp",
            Self::AlphaRamp => "Alpha ramp",
        }
    }
}

impl std::fmt::Display for MandelbrotColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
