use bookstore::{db_interaction::{today, RecordedSale}, models::Order, routes::customer::CustomerView, schema::orders};
use diesel::RunQueryDsl;

use crate::helpers::TestApp;

async fn app_with_selected_customer() -> TestApp{
    let app = TestApp::spawn_app().await;
    app.add_book(1, "History of Football");
    app.add_book(4, "Golf Bible");
    app.add_customer(1, "Alice");

    assert_eq!(app.lookup("Alice").await.status().as_u16(), 200);
    app
}

#[actix_web::test]
async fn order_without_selection_is_refused(){
    let app = TestApp::spawn_app().await;
    app.add_book(1, "History of Football");

    let response = app.post_order("1,History of Football", "7000").await;
    assert_eq!(response.status().as_u16(), 403);
    assert_eq!(app.order_count(), 0);
}

#[actix_web::test]
async fn non_numeric_price_is_rejected(){
    let app = app_with_selected_customer().await;

    let response = app.post_order("4,Golf Bible", "abc").await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(app.order_count(), 0);
}

#[actix_web::test]
async fn empty_price_is_rejected(){
    let app = app_with_selected_customer().await;

    let response = app.post_order("4,Golf Bible", "").await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(app.order_count(), 0);
}

#[actix_web::test]
async fn missing_book_is_rejected(){
    let app = app_with_selected_customer().await;

    let response = app.post_order("", "7000").await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(app.order_count(), 0);
}

#[actix_web::test]
async fn valid_order_inserts_one_row(){
    let app = app_with_selected_customer().await;

    let response = app.post_order("4,Golf Bible", "15000").await;
    assert_eq!(response.status().as_u16(), 200);

    let sale = response.json::<RecordedSale>().await.unwrap();
    assert_eq!(sale.orderid, 1);

    let mut conn = app.pool.get().unwrap();
    let rows: Vec<Order> = orders::table.load(&mut conn).unwrap();
    assert_eq!(rows, vec![Order{
        orderid: 1,
        custid: 1,
        bookid: 4,
        saleprice: 15000,
        orderdate: today()
    }]);

    let response = app.post_order("1,History of Football", "7000").await;
    assert_eq!(response.json::<RecordedSale>().await.unwrap().orderid, 2);
}

#[actix_web::test]
async fn unknown_book_reports_the_store_error(){
    let app = app_with_selected_customer().await;

    let response = app.post_order("42,Missing Book", "7000").await;
    assert_eq!(response.status().as_u16(), 500);

    let body = response.text().await.unwrap();
    assert!(body.contains("FOREIGN KEY constraint failed"), "{}", body);
    assert_eq!(app.order_count(), 0);
}

#[actix_web::test]
async fn recorded_sale_shows_up_first_in_history(){
    let app = app_with_selected_customer().await;

    assert_eq!(app.post_order("1,History of Football", "7000").await.status().as_u16(), 200);
    assert_eq!(app.post_order("4,Golf Bible", "35000").await.status().as_u16(), 200);

    let view = app.lookup("Alice").await.json::<CustomerView>().await.unwrap();

    let books: Vec<&str> = view.orders.iter().map(|o| o.bookname.as_str()).collect();
    assert_eq!(books, vec!["Golf Bible", "History of Football"]);
    assert_eq!(view.orders[0].saleprice, 35000);
    assert!(view.notice.is_none());
}
