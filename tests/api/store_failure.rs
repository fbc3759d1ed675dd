use crate::helpers::TestApp;

#[actix_web::test]
async fn book_list_query_failure_is_a_server_error(){
    let app = TestApp::spawn_app().await;
    app.add_book(1, "History of Football");
    app.drop_tables();

    let response = app.api_client.get(format!("{}/books", app.get_app_url()))
                    .send()
                    .await
                    .unwrap();

    assert_eq!(response.status().as_u16(), 500);
}

#[actix_web::test]
async fn lookup_query_failure_is_not_reported_as_not_found(){
    let app = TestApp::spawn_app().await;
    app.add_customer(1, "Alice");
    app.drop_tables();

    let response = app.lookup("Alice").await;
    assert_eq!(response.status().as_u16(), 500);
}
