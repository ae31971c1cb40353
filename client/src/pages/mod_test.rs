use super::*;

#[test]
fn clear_inputs_blanks_every_field() {
    let owner = Owner::new();
    owner.with(|| {
        let email = RwSignal::new("ada@corp.example".to_owned());
        let password = RwSignal::new("secret1!".to_owned());
        let untouched = RwSignal::new("keep".to_owned());

        clear_inputs(&[email, password]);

        assert_eq!(email.get_untracked(), "");
        assert_eq!(password.get_untracked(), "");
        assert_eq!(untouched.get_untracked(), "keep");
    });
}

#[test]
fn clear_inputs_accepts_no_fields() {
    let owner = Owner::new();
    owner.with(|| clear_inputs(&[]));
}
