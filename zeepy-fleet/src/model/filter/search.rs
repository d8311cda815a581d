use crate::model::state::Vehicle;

/// resolves search box input such as "#12" or "12" to a zero-based vehicle id.
/// like the dashboard, only the leading digits are read, so "12a" finds #12.
pub fn parse_search_input(input: &str) -> Option<usize> {
    let cleaned = input.replace('#', "");
    let digits: String = cleaned
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    let number: usize = digits.parse().ok()?;
    number.checked_sub(1)
}

pub fn search_vehicle<'a>(vehicles: &'a [Vehicle], input: &str) -> Option<&'a Vehicle> {
    let id = parse_search_input(input)?;
    vehicles.iter().find(|v| v.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_input() {
        assert_eq!(parse_search_input("#12"), Some(11));
        assert_eq!(parse_search_input("3"), Some(2));
        assert_eq!(parse_search_input("  #7"), Some(6));
        assert_eq!(parse_search_input("12abc"), Some(11));
        assert_eq!(parse_search_input("#0"), None);
        assert_eq!(parse_search_input("abc"), None);
        assert_eq!(parse_search_input(""), None);
        assert_eq!(parse_search_input("-4"), None);
    }

    #[test]
    fn test_search_vehicle() {
        let vehicles: Vec<Vehicle> = (0..3)
            .map(|id| Vehicle {
                id,
                lat: 31.0,
                lon: 121.6,
                is_active: true,
                angle: 0.0,
            })
            .collect();
        assert_eq!(search_vehicle(&vehicles, "#2").map(|v| v.id), Some(1));
        assert!(search_vehicle(&vehicles, "#4").is_none());
    }
}
