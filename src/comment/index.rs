use super::controller::{
    GET_COMMENT_ROUTE, create_comment, delete_comment, get_comment, get_comment_count,
    get_post_comments, missing_id, update_comment,
};
use crate::config::RouteAccess;
use crate::middleware::auth::verify_token;
use actix_web::middleware::Condition;
use actix_web::{guard, web};
use actix_web_httpauth::middleware::HttpAuthentication;

// Id segments accept the empty string so handlers can answer 400 for them.
pub fn comment_routes(cfg: &mut web::ServiceConfig, read_access: RouteAccess) {
    let read_auth = read_access.requires_auth();

    cfg.service(
        web::scope("/api/comments")
            .service(
                web::resource("")
                    .guard(guard::Post())
                    .wrap(HttpAuthentication::bearer(verify_token))
                    .to(create_comment),
            )
            .service(web::resource("").to(missing_id))
            .service(
                web::resource("/post/{post_id:[^/]*}")
                    .guard(guard::Get())
                    .wrap(Condition::new(read_auth, HttpAuthentication::bearer(verify_token)))
                    .to(get_post_comments),
            )
            .service(
                web::resource("/count/{post_id:[^/]*}")
                    .guard(guard::Get())
                    .wrap(Condition::new(read_auth, HttpAuthentication::bearer(verify_token)))
                    .to(get_comment_count),
            )
            .service(
                web::resource("/{id:[^/]*}")
                    .name(GET_COMMENT_ROUTE)
                    .guard(guard::Get())
                    .wrap(Condition::new(read_auth, HttpAuthentication::bearer(verify_token)))
                    .to(get_comment),
            )
            .service(
                web::resource("/{id:[^/]*}")
                    .wrap(HttpAuthentication::bearer(verify_token))
                    .route(web::put().to(update_comment))
                    .route(web::delete().to(delete_comment)),
            ),
    );
}
