//! WhatsApp 外链构造

use url::form_urlencoded;

/// wa.me 深链接前缀
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// 预填消息
pub fn contact_message(display_name: &str) -> String {
    format!("Hola! Estoy interesadx en adoptar a {display_name}. ¿Me dan más información?")
}

/// 构造 `https://wa.me/{handle}?text={message}`
///
/// 号码原样拼接，不做任何校验；消息按表单规则编码（空格为 `+`）。
pub fn build_contact_link(contact_handle: &str, display_name: &str) -> String {
    let message = contact_message(display_name);
    let encoded: String = form_urlencoded::byte_serialize(message.as_bytes()).collect();
    format!("{WHATSAPP_BASE_URL}/{contact_handle}?text={encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn decoded_text(link: &str) -> String {
        let url = Url::parse(link).unwrap();
        url.query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap()
    }

    #[test]
    fn test_link_for_luna() {
        let link = build_contact_link("5491112223333", "Luna");
        let url = Url::parse(&link).unwrap();

        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/5491112223333");
        assert_eq!(
            decoded_text(&link),
            "Hola! Estoy interesadx en adoptar a Luna. ¿Me dan más información?"
        );
    }

    #[test]
    fn test_spaces_encoded_as_plus() {
        let link = build_contact_link("1", "Max");
        assert!(link.starts_with("https://wa.me/1?text=Hola%21+Estoy+interesadx"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(
            build_contact_link("5492964600521", "Bella"),
            build_contact_link("5492964600521", "Bella")
        );
    }

    #[test]
    fn test_name_substituted_verbatim() {
        let name = "Señor & Co?";
        let link = build_contact_link("5492964600521", name);
        assert_eq!(decoded_text(&link), contact_message(name));
        assert_ne!(
            build_contact_link("5492964600521", "Luna"),
            build_contact_link("5492964600521", "Lola")
        );
    }

    #[test]
    fn test_handle_not_validated() {
        let link = build_contact_link("no-es-un-numero", "Rocky");
        assert!(link.starts_with("https://wa.me/no-es-un-numero?text="));
    }
}
