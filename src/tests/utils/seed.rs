use crate::container::Container;
use crate::domain::models::account::{Registration, Role};

pub struct SeededAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub async fn seed_account(container: &Container, name: &str, role: Role) -> SeededAccount {
    let email = format!("{}@helpdesk.io", name.to_lowercase());
    let password = "s3cret!".to_string();

    container
        .account_service
        .register(Registration {
            name: name.to_string(),
            email: email.to_owned(),
            password: password.to_owned(),
            confirm_password: password.to_owned(),
            role,
        })
        .await
        .unwrap();

    SeededAccount {
        name: name.to_string(),
        email,
        password,
    }
}
