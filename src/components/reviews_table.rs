/// Component to display the fetched reviews as a table.
/// Pure view: one header row, then one data row per review in input order.
use leptos::*;
use crate::models::review::{format_timestamp, Review};

#[component]
pub fn ReviewsTable(reviews: Vec<Review>) -> impl IntoView {
    view! {
        <table class="reviews-table">
            <thead>
                <tr>
                    <th>{ "User" }</th>
                    <th>{ "Product" }</th>
                    <th>{ "Review" }</th>
                    <th>{ "Timestamp" }</th>
                </tr>
            </thead>
            <tbody>
                {
                    reviews.into_iter().map(|review| {
                        view! {
                            <tr key={review.id.to_string()}>
                                <td>{ review.user_name }</td>
                                <td>{ review.product_name }</td>
                                <td>{ review.product_review }</td>
                                <td>{ format_timestamp(&review.created_at) }</td>
                            </tr>
                        }
                    }).collect::<Vec<_>>()
                }
            </tbody>
        </table>
    }
}
