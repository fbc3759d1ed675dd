use bookstore::{domain::Selection, routes::customer::CustomerView};

use crate::helpers::TestApp;

#[actix_web::test]
async fn lookup_returns_customer_and_selects_it(){
    let app = TestApp::spawn_app().await;
    let alice = app.add_customer(1, "Alice");
    app.add_customer(2, "Bob");

    let response = app.lookup("Alice").await;
    assert_eq!(response.status().as_u16(), 200);

    let view = response.json::<CustomerView>().await.unwrap();
    assert_eq!(view.customer, alice);
    assert!(view.orders.is_empty());
    assert!(view.notice.is_some());

    let selection = app.get_selection().await.json::<Selection>().await.unwrap();
    assert_eq!(selection, Selection{ custid: 1, name: "Alice".to_string() });
}

#[actix_web::test]
async fn unknown_name_is_not_found_and_clears_selection(){
    let app = TestApp::spawn_app().await;
    app.add_customer(1, "Alice");

    assert_eq!(app.lookup("Alice").await.status().as_u16(), 200);
    assert_eq!(app.get_selection().await.status().as_u16(), 200);

    let response = app.lookup("Nobody").await;
    assert_eq!(response.status().as_u16(), 404);

    assert_eq!(app.get_selection().await.status().as_u16(), 404);
}

#[actix_web::test]
async fn empty_name_is_rejected_and_clears_selection(){
    let app = TestApp::spawn_app().await;
    app.add_customer(1, "Alice");
    assert_eq!(app.lookup("Alice").await.status().as_u16(), 200);

    let response = app.lookup("").await;
    assert_eq!(response.status().as_u16(), 400);

    assert_eq!(app.get_selection().await.status().as_u16(), 404);
}

#[actix_web::test]
async fn whitespace_only_name_is_an_ordinary_miss(){
    let app = TestApp::spawn_app().await;
    app.add_customer(1, "Alice");
    assert_eq!(app.lookup("Alice").await.status().as_u16(), 200);

    let response = app.lookup("   ").await;
    assert_eq!(response.status().as_u16(), 404);

    assert_eq!(app.get_selection().await.status().as_u16(), 404);
}

#[actix_web::test]
async fn lookup_matches_surrounding_whitespace_exactly(){
    let app = TestApp::spawn_app().await;
    app.add_customer(1, "Alice");
    let kim = app.add_customer(2, " Kim");

    assert_eq!(app.lookup("Alice   ").await.status().as_u16(), 404);
    assert_eq!(app.lookup("Kim").await.status().as_u16(), 404);

    let response = app.lookup(" Kim").await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.json::<CustomerView>().await.unwrap().customer, kim);
}

#[actix_web::test]
async fn duplicate_names_are_reported_not_picked(){
    let app = TestApp::spawn_app().await;
    app.add_customer(3, "Kim");
    app.add_customer(9, "Kim");

    let response = app.lookup("Kim").await;
    assert_eq!(response.status().as_u16(), 409);

    let body = response.json::<serde_json::Value>().await.unwrap();
    let ids: Vec<i64> = body["candidates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["custid"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 9]);

    assert_eq!(app.get_selection().await.status().as_u16(), 404);
}

#[actix_web::test]
async fn ambiguous_lookup_is_resolved_by_selecting_an_id(){
    let app = TestApp::spawn_app().await;
    app.add_customer(3, "Kim");
    let second = app.add_customer(9, "Kim");

    assert_eq!(app.lookup("Kim").await.status().as_u16(), 409);

    let response = app.select(9).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.json::<CustomerView>().await.unwrap().customer, second);

    let selection = app.get_selection().await.json::<Selection>().await.unwrap();
    assert_eq!(selection.custid, 9);
}

#[actix_web::test]
async fn selecting_unknown_id_is_not_found(){
    let app = TestApp::spawn_app().await;

    let response = app.select(42).await;
    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(app.get_selection().await.status().as_u16(), 404);
}
