mod basic;

use super::Transducer;

pub(super) fn transducer() -> Transducer {
    Transducer::from_toml(crate::table::default_toml()).unwrap()
}
