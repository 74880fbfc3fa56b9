/// 每個單字首字母大寫，其餘小寫
///
/// 單字從前一個字元不是「有大小寫的字母」之後開始，所以 `"o'neil"` 變成
/// `"O'Neil"`，`"3rd"` 變成 `"3Rd"`，`"中a"` 變成 `"中A"`（中文沒有大小寫）。
/// std 沒有 titlecase 對應，首字母用 `to_uppercase`，因此 `"ß"` 會變成 `"SS"`
/// 而不是 `"Ss"`。
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_cased = false;

    for c in input.chars() {
        let cased = is_cased(c);
        if cased && prev_cased {
            out.extend(c.to_lowercase());
        } else if cased {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_cased = cased;
    }

    out
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("praça"), "Praça");
        assert_eq!(title_case("pizza Express"), "Pizza Express");
        assert_eq!(title_case("MEXICAN food"), "Mexican Food");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("3rd street"), "3Rd Street");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_uncased_letters_start_a_word() {
        assert_eq!(title_case("中a"), "中A");
        assert_eq!(title_case("寿司bar"), "寿司Bar");
    }

    #[test]
    fn test_sharp_s_uppercases_fully() {
        assert_eq!(title_case("ßa"), "SSa");
        assert_eq!(title_case("straße"), "Straße");
    }
}
