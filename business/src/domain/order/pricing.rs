use super::errors::OrderError;

/// Flat delivery rate, currency units per kilometre.
pub const DELIVERY_RATE_PER_KM: f64 = 5.0;

pub fn delivery_cost(distance_km: f64) -> f64 {
    distance_km * DELIVERY_RATE_PER_KM
}

pub fn validate_distance(distance_km: f64) -> Result<f64, OrderError> {
    if distance_km.is_finite() && distance_km > 0.0 {
        Ok(distance_km)
    } else {
        Err(OrderError::InvalidDistance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_charge_five_per_kilometre() {
        assert_eq!(delivery_cost(10.0), 50.0);
        assert_eq!(delivery_cost(2.5), 12.5);
    }

    #[test]
    fn should_reject_non_positive_or_non_finite_distance() {
        assert!(validate_distance(0.0).is_err());
        assert!(validate_distance(-3.0).is_err());
        assert!(validate_distance(f64::NAN).is_err());
        assert!(validate_distance(f64::INFINITY).is_err());
        assert_eq!(validate_distance(4.2).unwrap(), 4.2);
    }
}
