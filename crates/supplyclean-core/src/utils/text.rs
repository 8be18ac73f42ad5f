/// Title-case a string: a cased letter is upper-cased when the previous
/// character is not a cased letter and lower-cased otherwise.
///
/// Word boundaries are any non-cased character, so `stock_low` becomes
/// `Stock_Low` and `3rd` becomes `3Rd`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_cased = false;
    for c in value.chars() {
        let cased = c.is_uppercase() || c.is_lowercase();
        if cased {
            if previous_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
        } else {
            out.push(c);
        }
        previous_cased = cased;
    }
    out
}
