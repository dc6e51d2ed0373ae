
use fixtures::*;
use presentable::prelude::*;
use presentable::{PaginationLinks, PaginationMeta, PresentConfig};
use serde_json::json;

#[test]
fn test_pagination_envelope_from_host_paginator() {
    let paginator = FixturePaginator::new(users(10));
    let envelope = UserPresenter::pagination(&paginator);

    assert_eq!(envelope.data().len(), 10);
    assert_eq!(
        envelope.links(),
        &PaginationLinks {
            first: "http://example.com/pagination?page=1".into(),
            last: "http://example.com/pagination?page=100".into(),
            prev: None,
            next: Some("http://example.com/pagination?page=2".into()),
        }
    );
    assert_eq!(
        envelope.meta(),
        &PaginationMeta {
            current_page: 1,
            from: 1,
            last_page: 100,
            path: "http://example.com/pagination".into(),
            per_page: 15,
            to: 10,
            total: 10,
        }
    );
}

#[test]
fn test_pagination_json_shape() {
    let paginator = FixturePaginator::new(roles(1));
    let envelope = CustomRolePresenter::pagination(&paginator);

    assert_eq!(
        envelope.to_value().unwrap(),
        json!({
            "data": [
                { "fullTitle": "Role1 - Description 1", "name": "Role1", "custom": "Custom Value" }
            ],
            "links": {
                "first": "http://example.com/pagination?page=1",
                "last": "http://example.com/pagination?page=100",
                "prev": null,
                "next": "http://example.com/pagination?page=2"
            },
            "meta": {
                "current_page": 1,
                "from": 1,
                "last_page": 100,
                "path": "http://example.com/pagination",
                "per_page": 15,
                "to": 10,
                "total": 10
            }
        })
    );

    let encoded = envelope.to_json().unwrap();
    assert!(encoded.starts_with(r#"{"data":"#));
    assert!(encoded.contains(r#""links":{"first":"#));
}

#[test]
fn test_pagination_data_wraps_page_items() {
    let paginator = FixturePaginator::new(users(3));
    let envelope = UserPresenter::pagination(&paginator);
    for (presenter, user) in envelope.data().iter().zip(paginator.items()) {
        assert!(std::ptr::eq(presenter.record(), user));
    }
}

#[test]
fn test_page_appends_are_preserved_in_links() {
    let page = Page::new(users(2), 30, 2, 3)
        .with_path("http://example.com/users")
        .appends("sort", "email");
    let envelope = UserSummaryPresenter::pagination(&page);
    let links = envelope.links();

    assert_eq!(links.first, "http://example.com/users?sort=email&page=1");
    assert_eq!(links.last, "http://example.com/users?sort=email&page=15");
    assert_eq!(
        links.prev.as_deref(),
        Some("http://example.com/users?sort=email&page=2")
    );
    assert_eq!(
        links.next.as_deref(),
        Some("http://example.com/users?sort=email&page=4")
    );
    assert_eq!(envelope.meta().from, 5);
    assert_eq!(envelope.meta().to, 6);
}

#[test]
fn test_custom_page_name_from_config() {
    let config = PresentConfig::from_json_str(r#"{ "page_name": "p" }"#).unwrap();
    let page = Page::new(roles(1), 1, 10, 1)
        .with_path("/roles")
        .with_config(&config);
    let envelope = RolePresenter::pagination(&page);
    assert_eq!(envelope.links().first, "/roles?p=1");
    assert_eq!(envelope.links().last, "/roles?p=1");
    assert_eq!(envelope.links().next, None);
}

#[test]
fn test_empty_page_defaults_ordinals_to_zero() {
    let page: Page<User> = Page::new(Vec::new(), 0, 15, 1).with_path("/users");
    let envelope = UserPresenter::pagination(&page);

    assert!(envelope.data().is_empty());
    assert_eq!(envelope.meta().from, 0);
    assert_eq!(envelope.meta().to, 0);
    assert_eq!(envelope.meta().last_page, 1);
    assert_eq!(envelope.to_value().unwrap()["data"], json!([]));
    assert_eq!(envelope.to_value().unwrap()["links"]["prev"], Value::Null);
}

#[test]
fn test_envelope_into_parts() {
    let paginator = FixturePaginator::new(roles(2));
    let (data, links, meta) = RolePresenter::pagination(&paginator).into_parts();
    assert_eq!(data.len(), 2);
    assert_eq!(links.prev, None);
    assert_eq!(meta.per_page, 15);
}

#[test]
fn test_huge_requested_page_does_not_overflow() {
    let page = Page::new(users(1), 10, 15, u64::MAX / 10).with_path("/users");
    let envelope = UserPresenter::pagination(&page);

    assert_eq!(envelope.meta().current_page, u64::MAX / 10);
    assert_eq!(envelope.meta().from, 0);
    assert_eq!(envelope.meta().to, 0);
    assert_eq!(envelope.meta().last_page, 1);
    assert_eq!(envelope.links().next, None);
    assert_eq!(
        envelope.links().prev,
        Some(format!("/users?page={}", u64::MAX / 10 - 1))
    );
}
