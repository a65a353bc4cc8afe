use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Selects which numeric-scale column range receives the sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Man,
    Woman,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "man" | "m" | "uomo" | "false" => Ok(Gender::Man),
            "woman" | "w" | "donna" | "true" => Ok(Gender::Woman),
            other => Err(format!("unknown gender: {other}")),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Man => f.write_str("man"),
            Gender::Woman => f.write_str("woman"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Alpha,
    Numeric,
}

impl Scale {
    /// `"numeri"` in any letter case is the numeric scale, anything else is
    /// alpha.
    pub fn classify(raw: &str) -> Self {
        if raw.to_lowercase() == "numeri" {
            Scale::Numeric
        } else {
            Scale::Alpha
        }
    }
}

/// Fixed row and column positions of the import and template sheets.
/// All positions are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub import_header_row: usize,
    pub import_first_data_row: usize,
    pub import_scale_col: usize,
    pub import_sizes_first_col: usize,

    pub template_first_data_row: usize,
    pub template_model_col: usize,
    pub template_fabric_col: usize,
    pub template_color_col: usize,

    pub alpha_start_col: usize,
    pub numeric_start_col_man: usize,
    pub numeric_start_col_woman: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            import_header_row: 5,
            import_first_data_row: 6,
            import_scale_col: 5,
            import_sizes_first_col: 6,

            template_first_data_row: 8,
            template_model_col: 3,
            template_fabric_col: 4,
            template_color_col: 5,

            alpha_start_col: 37,       // AK
            numeric_start_col_man: 27, // AA
            numeric_start_col_woman: 45, // AS
        }
    }
}

impl Layout {
    pub fn numeric_start(&self, gender: Gender) -> usize {
        match gender {
            Gender::Man => self.numeric_start_col_man,
            Gender::Woman => self.numeric_start_col_woman,
        }
    }

    /// First template column that receives a record's size vector.
    pub fn start_column(&self, scale: Scale, gender: Gender) -> usize {
        match scale {
            Scale::Alpha => self.alpha_start_col,
            Scale::Numeric => self.numeric_start(gender),
        }
    }
}
