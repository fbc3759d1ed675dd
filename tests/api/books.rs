use crate::helpers::TestApp;

#[actix_web::test]
async fn books_are_listed_as_id_name_entries(){
    let app = TestApp::spawn_app().await;
    app.add_book(2, "Football for Women");
    app.add_book(1, "History of Football");
    app.add_book(10, "Olympic Champions");

    let response = app.api_client.get(format!("{}/books", app.get_app_url()))
                    .send()
                    .await
                    .expect("Failed to send request to books endpoint");

    assert_eq!(response.status().as_u16(), 200);

    let body = response.json::<Vec<String>>().await.unwrap();
    assert_eq!(body, vec![
        "1,History of Football",
        "2,Football for Women",
        "10,Olympic Champions"
    ]);
}

#[actix_web::test]
async fn empty_catalogue_is_an_empty_list(){
    let app = TestApp::spawn_app().await;

    let response = app.api_client.get(format!("{}/books", app.get_app_url()))
                    .send()
                    .await
                    .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.json::<Vec<String>>().await.unwrap().is_empty());
}
