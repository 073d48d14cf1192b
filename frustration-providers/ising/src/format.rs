use std::{fmt, str::FromStr};

use crate::errors::IsingFormatError;

/// Supported problem file formats.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum InputFormat {
    /// Header line plus `u v w` triples.
    #[default]
    Qubist,
    /// QMASM assembly source.
    Qmasm,
    /// `p qubo` files over 0/1 variables.
    Qubo,
    /// bqpjson documents.
    Bqpjson,
}

impl InputFormat {
    /// Every supported format.
    pub const ALL: [Self; 4] = [Self::Qubist, Self::Qmasm, Self::Qubo, Self::Bqpjson];

    /// Lower-case name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Qubist => "qubist",
            Self::Qmasm => "qmasm",
            Self::Qubo => "qubo",
            Self::Bqpjson => "bqpjson",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputFormat {
    type Err = IsingFormatError;

    /// Parses a format name, ignoring ASCII case.
    ///
    /// # Examples
    /// ```
    /// use frustration_providers_ising::InputFormat;
    ///
    /// assert_eq!("QMASM".parse::<InputFormat>()?, InputFormat::Qmasm);
    /// assert!("dimacs".parse::<InputFormat>().is_err());
    /// # Ok::<(), frustration_providers_ising::IsingFormatError>(())
    /// ```
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| IsingFormatError::UnknownFormat {
                name: name.to_owned(),
            })
    }
}
