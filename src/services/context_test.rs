use super::*;

#[test]
fn absent_context_uses_defaults() {
    assert_eq!(UserContext::parse(None), UserContext::default());
    assert_eq!(UserContext::parse(Some("")), UserContext::default());
    assert_eq!(UserContext::parse(Some("   ")), UserContext::default());
}

#[test]
fn empty_object_uses_defaults() {
    let ctx = UserContext::parse(Some("{}"));
    assert_eq!(ctx.role, "guest");
    assert_eq!(ctx.page, "/");
    assert!(!ctx.logged_in);
    assert!(ctx.name.is_none());
}

#[test]
fn full_context_parses() {
    let ctx = UserContext::parse(Some(
        r#"{"userRole":"seller","currentPage":"/seller","isLoggedIn":true,"userName":"Ekaette"}"#,
    ));
    assert_eq!(ctx.role, "seller");
    assert_eq!(ctx.page, "/seller");
    assert!(ctx.logged_in);
    assert_eq!(ctx.name.as_deref(), Some("Ekaette"));
}

#[test]
fn malformed_json_uses_defaults() {
    assert_eq!(UserContext::parse(Some("{userRole: seller")), UserContext::default());
}

#[test]
fn non_object_json_uses_defaults() {
    assert_eq!(UserContext::parse(Some(r#"["seller"]"#)), UserContext::default());
    assert_eq!(UserContext::parse(Some("42")), UserContext::default());
}

#[test]
fn mistyped_fields_fall_back_individually() {
    let ctx = UserContext::parse(Some(r#"{"userRole":7,"currentPage":"/cart","isLoggedIn":"yes"}"#));
    assert_eq!(ctx.role, "guest");
    assert_eq!(ctx.page, "/cart");
    assert!(!ctx.logged_in);
}

#[test]
fn blank_user_name_is_dropped() {
    let ctx = UserContext::parse(Some(r#"{"userName":"  "}"#));
    assert!(ctx.name.is_none());
}

#[test]
fn display_renders_single_line() {
    let line = UserContext::default().to_string();
    assert_eq!(line, "User Context: Role=guest, Page=/, LoggedIn=false");
    assert!(!line.contains('\n'));
}

#[test]
fn display_appends_name_when_present() {
    let ctx = UserContext { name: Some("Ekaette".into()), ..UserContext::default() };
    assert!(ctx.to_string().ends_with(", Name=Ekaette"));
}
