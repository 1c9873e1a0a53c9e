use crate::error::PrimitivesError;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! count {
    () => (0usize);
    ($head:tt $(,$tail:tt)*) => (1usize + count!($($tail),*));
}

macro_rules! proof_systems {
    ($(($variant:ident, $str:literal)),* $(,)?) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum ProofSystem {
            $(
                #[serde(rename = $str)]
                $variant
            ),*
        }

        #[allow(non_upper_case_globals)]
        #[allow(non_snake_case)]
        pub mod system_id {
            use super::ProofSystem;
            $(
                pub const $variant: ProofSystem = ProofSystem::$variant;
                pub mod $variant {
                    pub const NAME: &str = $str;
                }
            )*
        }

        impl ProofSystem {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str),*
                }
            }

            pub const fn all() -> [ProofSystem; {count!($($variant),*)}] {
                [$(ProofSystem::$variant),*]
            }
        }

        impl TryFrom<&str> for ProofSystem {
            type Error = PrimitivesError;

            fn try_from(s: &str) -> core::result::Result<Self, Self::Error> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)*
                    _ => Err(PrimitivesError::InvalidProofSystem(s.to_string())),
                }
            }
        }
    };
}

proof_systems! {
    (Groth16, "groth16"),
    (Plonk, "plonk"),
}

impl fmt::Display for ProofSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
