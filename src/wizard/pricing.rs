/// Price per unit of carpet area, to two decimals.
///
/// Blank when either input is missing or not a number, or when the area is zero.
pub fn price_per_unit_area(price: &str, area: &str) -> String {
    let (price, area) = (price.trim(), area.trim());
    if price.is_empty() || area.is_empty() {
        return String::new();
    }

    match (price.parse::<f64>(), area.parse::<f64>()) {
        (Ok(price), Ok(area)) if price.is_finite() && area.is_finite() && area > 0.0 => {
            format!("{:.2}", price / area)
        }
        _ => String::new(),
    }
}
