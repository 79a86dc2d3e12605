//! Block height.

use serde::{Deserialize, Serialize};

use crate::serialization::SerializationError;

/// The height of a block is the length of the chain back to the genesis
/// block.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "proptest-impl"),
    derive(proptest_derive::Arbitrary)
)]
pub struct Height(pub u32);

impl std::str::FromStr for Height {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse() {
            Ok(h) if (Height(h) <= Height::MAX) => Ok(Height(h)),
            Ok(_) => Err(SerializationError::Parse(
                "block height exceeds the maximum height",
            )),
            Err(_) => Err(SerializationError::Parse("invalid height")),
        }
    }
}

impl Height {
    /// The minimum [`Height`].
    ///
    /// Due to the underlying type, it is impossible to construct block
    /// heights less than [`Height::MIN`].
    pub const MIN: Height = Height(0);

    /// The maximum [`Height`].
    ///
    /// Users should not construct block heights greater than
    /// [`Height::MAX`]. This matches the bound that keeps heights and
    /// timestamps distinguishable in transaction lock times.
    pub const MAX: Height = Height(499_999_999);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_in_range_heights() {
        assert_eq!("0".parse::<Height>().unwrap(), Height::MIN);
        assert_eq!("499999999".parse::<Height>().unwrap(), Height::MAX);
    }

    #[test]
    fn rejects_out_of_range_heights() {
        assert!("500000000".parse::<Height>().is_err());
        assert!("-1".parse::<Height>().is_err());
        assert!("bogus".parse::<Height>().is_err());
    }
}
