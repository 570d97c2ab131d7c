//! App Router

use salvo::Router;

use crate::{auth, baskets, categories, favorites, products, restaurants, reviews};

fn basket_router() -> Router {
    Router::with_path("basket")
        .post(baskets::create::handler)
        .get(baskets::get::handler)
        .delete(baskets::clear::handler)
        .push(Router::with_path("summary").get(baskets::summary::handler))
        .push(Router::with_path("count").get(baskets::count::handler))
        .push(Router::with_path("restaurants").get(baskets::restaurants::handler))
        .push(Router::with_path("validation").get(baskets::validate::handler))
        .push(Router::with_path("sync").post(baskets::sync::handler))
        .push(
            Router::with_path("items")
                .post(baskets::items::add::handler)
                .push(
                    Router::with_path("{item}")
                        .put(baskets::items::update::handler)
                        .delete(baskets::items::remove::handler)
                        .push(
                            Router::with_path("increment").post(baskets::items::increment::handler),
                        )
                        .push(
                            Router::with_path("decrement").post(baskets::items::decrement::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("products/{product}")
                .get(baskets::products::get::handler)
                .delete(baskets::products::delete::handler),
        )
}

fn catalog_routers() -> Vec<Router> {
    vec![
        Router::with_path("products")
            .get(products::index::handler)
            .post(products::create::handler)
            .push(
                Router::with_path("{product}")
                    .get(products::get::handler)
                    .put(products::update::handler)
                    .delete(products::delete::handler)
                    .push(Router::with_path("stock").put(products::stock::handler))
                    .push(Router::with_path("status").post(products::status::handler))
                    .push(Router::with_path("featured").post(products::featured::handler))
                    .push(
                        Router::with_path("reviews")
                            .push(Router::with_path("stats").get(reviews::stats::handler))
                            .push(Router::with_path("mine").get(reviews::mine::handler)),
                    ),
            ),
        Router::with_path("restaurants")
            .get(restaurants::index::handler)
            .post(restaurants::create::handler)
            .push(Router::with_path("featured").get(restaurants::featured_index::handler))
            .push(Router::with_path("slug/{slug}").get(restaurants::by_slug::handler))
            .push(Router::with_path("city/{city}").get(restaurants::by_city::handler))
            .push(
                Router::with_path("{restaurant}")
                    .get(restaurants::get::handler)
                    .delete(restaurants::delete::handler)
                    .push(Router::with_path("status").post(restaurants::status::handler))
                    .push(Router::with_path("open").post(restaurants::open::handler))
                    .push(Router::with_path("featured").post(restaurants::featured::handler)),
            ),
        Router::with_path("categories")
            .get(categories::index::handler)
            .post(categories::create::handler)
            .push(Router::with_path("order").put(categories::reorder::handler))
            .push(
                Router::with_path("{category}")
                    .get(categories::get::handler)
                    .put(categories::update::handler)
                    .delete(categories::delete::handler),
            ),
    ]
}

fn engagement_routers() -> Vec<Router> {
    vec![
        Router::with_path("reviews")
            .get(reviews::index::handler)
            .post(reviews::create::handler)
            .push(
                Router::with_path("{review}")
                    .get(reviews::get::handler)
                    .put(reviews::update::handler)
                    .delete(reviews::delete::handler),
            ),
        Router::with_path("favorites")
            .get(favorites::index::handler)
            .delete(favorites::clear::handler)
            .push(Router::with_path("count").get(favorites::count::handler))
            .push(
                Router::with_path("{product}")
                    .get(favorites::get::handler)
                    .put(favorites::add::handler)
                    .delete(favorites::remove::handler)
                    .push(Router::with_path("toggle").post(favorites::toggle::handler)),
            ),
    ]
}

pub fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(basket_router())
        .append(&mut catalog_routers())
        .append(&mut engagement_routers())
}
