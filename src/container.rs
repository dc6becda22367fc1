use std::sync::Arc;

use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::store::KeyValueStore;
use crate::domain::services::account::AccountService;
use crate::domain::services::jsonwebtoken::JsonWebTokenService;
use crate::domain::services::session::SessionService;
use crate::domain::services::ticket::TicketService;

use crate::services::account::AccountServiceImpl;
use crate::services::jsonwebtoken::{JsonWebTokenServiceImpl, KeyPair};
use crate::services::session::SessionServiceImpl;
use crate::services::ticket::TicketServiceImpl;

use crate::infrastructure::repositories::account::AccountRepositoryImpl;
use crate::infrastructure::repositories::session::SessionRepositoryImpl;
use crate::infrastructure::repositories::ticket::TicketRepositoryImpl;

pub struct Container {
    pub account_service: Arc<dyn AccountService>,
    pub session_service: Arc<dyn SessionService>,
    pub ticket_service: Arc<dyn TicketService>,
    pub jsonwebtoken_service: Arc<dyn JsonWebTokenService>,
}

impl Container {
    pub fn new(store: Arc<dyn KeyValueStore>, keys: KeyPair) -> Self {
        let accounts: Arc<dyn AccountRepository> =
            Arc::new(AccountRepositoryImpl::new(store.clone()));

        Container {
            account_service: Arc::new(AccountServiceImpl::new(accounts.clone())),
            session_service: session_service(accounts, store.clone()),
            ticket_service: ticket_service(store),
            jsonwebtoken_service: jsonwebtoken_service(keys),
        }
    }
}

fn session_service(
    accounts: Arc<dyn AccountRepository>,
    store: Arc<dyn KeyValueStore>,
) -> Arc<dyn SessionService> {
    Arc::new(SessionServiceImpl::new(
        accounts,
        Arc::new(SessionRepositoryImpl::new(store)),
    ))
}

fn ticket_service(store: Arc<dyn KeyValueStore>) -> Arc<dyn TicketService> {
    Arc::new(TicketServiceImpl::new(Arc::new(TicketRepositoryImpl::new(
        store,
    ))))
}

fn jsonwebtoken_service(keys: KeyPair) -> Arc<dyn JsonWebTokenService> {
    Arc::new(JsonWebTokenServiceImpl::new(keys))
}
