use crate::foundation::error::{RevealError, RevealResult};

/// One animatable visual channel of an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Property {
    Opacity,
    /// px
    TranslateX,
    /// px
    TranslateY,
    /// px, positive is toward the viewer
    TranslateZ,
    /// multiplicative, 1.0 is identity
    Scale,
    /// degrees around the horizontal axis
    RotateX,
    /// degrees around the vertical axis
    RotateY,
    /// blur radius in px
    Blur,
}

impl Property {
    pub const ALL: [Property; 8] = [
        Property::Opacity,
        Property::TranslateX,
        Property::TranslateY,
        Property::TranslateZ,
        Property::Scale,
        Property::RotateX,
        Property::RotateY,
        Property::Blur,
    ];

    /// Properties in the same group are driven by one interpolation at a time.
    pub fn group(self) -> PropertyGroup {
        match self {
            Self::Opacity => PropertyGroup::Opacity,
            Self::TranslateX | Self::TranslateY | Self::TranslateZ | Self::Scale => {
                PropertyGroup::Position
            }
            Self::RotateX | Self::RotateY => PropertyGroup::Rotation,
            Self::Blur => PropertyGroup::Filter,
        }
    }

    pub fn parse(s: &str) -> RevealResult<Self> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "opacity" => Ok(Self::Opacity),
            "translatex" | "x" => Ok(Self::TranslateX),
            "translatey" | "y" => Ok(Self::TranslateY),
            "translatez" | "z" => Ok(Self::TranslateZ),
            "scale" => Ok(Self::Scale),
            "rotatex" => Ok(Self::RotateX),
            "rotatey" => Ok(Self::RotateY),
            "blur" => Ok(Self::Blur),
            _ => Err(RevealError::validation(format!("unknown property '{s}'"))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PropertyGroup {
    Opacity,
    Position,
    Rotation,
    Filter,
}

/// The visual state the orchestration core writes to an element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Style {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub translate_z: f64,
    pub scale: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub blur: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            translate_z: 0.0,
            scale: 1.0,
            rotate_x: 0.0,
            rotate_y: 0.0,
            blur: 0.0,
        }
    }
}

impl Style {
    pub fn get(&self, p: Property) -> f64 {
        match p {
            Property::Opacity => self.opacity,
            Property::TranslateX => self.translate_x,
            Property::TranslateY => self.translate_y,
            Property::TranslateZ => self.translate_z,
            Property::Scale => self.scale,
            Property::RotateX => self.rotate_x,
            Property::RotateY => self.rotate_y,
            Property::Blur => self.blur,
        }
    }

    pub fn set(&mut self, p: Property, v: f64) {
        let slot = match p {
            Property::Opacity => &mut self.opacity,
            Property::TranslateX => &mut self.translate_x,
            Property::TranslateY => &mut self.translate_y,
            Property::TranslateZ => &mut self.translate_z,
            Property::Scale => &mut self.scale,
            Property::RotateX => &mut self.rotate_x,
            Property::RotateY => &mut self.rotate_y,
            Property::Blur => &mut self.blur,
        };
        *slot = v;
    }

    /// CSS `transform` value; identity components are omitted.
    pub fn css_transform(&self) -> String {
        let mut parts = Vec::new();
        if self.translate_x != 0.0 {
            parts.push(format!("translateX({}px)", self.translate_x));
        }
        if self.translate_y != 0.0 {
            parts.push(format!("translateY({}px)", self.translate_y));
        }
        if self.translate_z != 0.0 {
            parts.push(format!("translateZ({}px)", self.translate_z));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        if self.rotate_x != 0.0 {
            parts.push(format!("rotateX({}deg)", self.rotate_x));
        }
        if self.rotate_y != 0.0 {
            parts.push(format!("rotateY({}deg)", self.rotate_y));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }

    /// CSS `filter` value.
    pub fn css_filter(&self) -> String {
        if self.blur == 0.0 {
            "none".to_string()
        } else {
            format!("blur({}px)", self.blur)
        }
    }
}

/// A single channel moving from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Track {
    pub property: Property,
    pub from: f64,
    pub to: f64,
}

impl Track {
    pub const fn new(property: Property, from: f64, to: f64) -> Self {
        Self { property, from, to }
    }

    /// Value at eased progress `eased`. Callers write `to` directly on
    /// completion, since `from + (to - from)` is not always exactly `to`.
    pub fn sample(&self, eased: f64) -> f64 {
        self.from + (self.to - self.from) * eased
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/property.rs"]
mod tests;
