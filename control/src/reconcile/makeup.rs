use super::db_to_linear;
use crate::{Cache, Validation};

impl Cache {
    pub fn set_makeup(&mut self, db: f32) -> Validation {
        self.inputs.makeup = db;
        self.attributes.makeup = db_to_linear(db);
        Validation::Accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn makeup_accepts_both_boost_and_cut() {
        let mut cache = Cache::default();
        assert_eq!(cache.set_makeup(20.0), Validation::Accepted);
        assert_relative_eq!(cache.attributes.makeup, 10.0, max_relative = 1e-6);
        assert_eq!(cache.set_makeup(-40.0), Validation::Accepted);
        assert_relative_eq!(cache.attributes.makeup, 0.01, max_relative = 1e-6);
    }
}
