use super::*;

fn draft(email: &str, role: Role, company_id: &str) -> InvitationDraft {
    InvitationDraft { email: email.to_owned(), role, company_id: company_id.to_owned() }
}

#[test]
fn customer_invitation_requires_company() {
    assert_eq!(
        draft("kunde@firma.de", Role::Customer, " ").validate(),
        Err(Text::InviteCompanyRequired)
    );
    let ok = draft(" kunde@firma.de ", Role::Customer, "c1").validate().expect("valid");
    assert_eq!(ok.email, "kunde@firma.de");
    assert_eq!(ok.company_id.as_deref(), Some("c1"));
}

#[test]
fn staff_invitation_drops_company() {
    let ok = draft("dev@agency.de", Role::Developer, "c1").validate().expect("valid");
    assert_eq!(ok.role, Role::Developer);
    assert_eq!(ok.company_id, None);
}

#[test]
fn malformed_email_is_rejected() {
    for email in ["", "no-at-sign", "@agency.de", "dev@localhost", "dev@agency."] {
        assert_eq!(draft(email, Role::Admin, "").validate(), Err(Text::InviteEmailRequired), "{email}");
    }
}
