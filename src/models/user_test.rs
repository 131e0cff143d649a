use super::*;

// =============================================================
// Identity wire format
// =============================================================

#[test]
fn identity_round_trips_with_unknown_profile_fields() {
    let raw = serde_json::json!({
        "_id": "u1",
        "firstName": "Asha",
        "lastName": "Iyer",
        "email": "asha@example.com",
        "role": "patient",
        "profilePicture": "https://example.com/a.png",
        "bloodGroup": "O+",
        "MedicalHistory": "None",
    });

    let identity: Identity = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(identity.id, "u1");
    assert_eq!(identity.role, Role::Patient);
    assert_eq!(identity.full_name(), "Asha Iyer");
    // Fields the struct does not know about survive in the profile bag
    assert_eq!(identity.profile["bloodGroup"], "O+");

    let back = serde_json::to_value(&identity).unwrap();
    assert_eq!(back, raw);
}

#[test]
fn roles_deserialize_from_lowercase_strings() {
    for (raw, role) in [
        ("\"doctor\"", Role::Doctor),
        ("\"patient\"", Role::Patient),
        ("\"admin\"", Role::Admin),
    ] {
        assert_eq!(serde_json::from_str::<Role>(raw).unwrap(), role);
    }
}

#[test]
fn unknown_role_is_an_error() {
    assert!(serde_json::from_str::<Role>("\"nurse\"").is_err());
}

#[test]
fn role_as_str_matches_the_wire_values() {
    for role in [Role::Doctor, Role::Patient, Role::Admin] {
        assert_eq!(
            serde_json::to_value(role).unwrap(),
            serde_json::Value::String(role.as_str().to_string())
        );
    }
}
