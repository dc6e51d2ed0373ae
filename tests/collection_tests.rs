
use fixtures::*;
use presentable::prelude::*;
use serde_json::json;

#[test]
fn test_collection_is_a_bijection_in_order() {
    let users = users(5);
    let presented = UserPresenter::collection(&users);

    assert_eq!(presented.len(), users.len());
    for (presenter, user) in presented.iter().zip(&users) {
        assert!(std::ptr::eq(presenter.record(), user));
    }
}

#[test]
fn test_collection_of_empty_input() {
    let users: Vec<User> = Vec::new();
    let presented = UserPresenter::collection(&users);
    assert!(presented.is_empty());
    assert_eq!(presented.to_json().unwrap(), "[]");
}

#[test]
fn test_collection_accepts_any_iterator_of_references() {
    let roles = roles(4);
    let presented = RolePresenter::collection(roles.iter().filter(|role| role.name != "Role2"));
    let names: Vec<_> = presented
        .iter()
        .map(|presenter| presenter.record().name.as_str())
        .collect();
    assert_eq!(names, ["Role1", "Role3", "Role4"]);
}

#[test]
fn test_collection_positional_access() {
    let roles = roles(3);
    let presented = CustomRolePresenter::collection(&roles);

    assert_eq!(presented[1].get("name").unwrap(), json!("Role2"));
    assert!(std::ptr::eq(presented.first().unwrap().record(), &roles[0]));
    assert!(std::ptr::eq(presented.last().unwrap().record(), &roles[2]));
    assert!(presented.get(3).is_none());
}

#[test]
fn test_collection_serializes_each_presenter() {
    let roles = roles(2);
    let presented = CustomRolePresenter::collection(&roles);
    assert_eq!(
        presented.to_value(),
        json!([
            { "fullTitle": "Role1 - Description 1", "name": "Role1", "custom": "Custom Value" },
            { "fullTitle": "Role2 - Description 2", "name": "Role2", "custom": "Custom Value" }
        ])
    );
    assert_eq!(
        serde_json::to_value(&presented).unwrap(),
        presented.to_value()
    );
    assert_eq!(presented.to_attributes().len(), 2);
}

#[test]
fn test_collection_into_iterator() {
    let users = users(3);
    let emails: Vec<Value> = UserSummaryPresenter::collection(&users)
        .into_iter()
        .map(|presenter| presenter.get("email").unwrap())
        .collect();
    assert_eq!(
        emails,
        [
            json!("user1@example.com"),
            json!("user2@example.com"),
            json!("user3@example.com")
        ]
    );
}
