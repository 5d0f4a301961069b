use crate::error::Result;
use crate::models::{Session, UserType};
use crate::session::{sign_in, sign_out, LocalStorage};

pub fn login(email: &str, admin: bool) -> Result<()> {
    let email = email.trim();
    let session = if admin {
        Session {
            user_type: UserType::Admin,
            email: email.to_string(),
        }
    } else {
        Session::employee(email)
    };
    let mut storage = LocalStorage::open(&LocalStorage::default_path());
    sign_in(&mut storage, &session)?;
    println!("Logged in as {}", session.email);
    Ok(())
}

pub fn logout() -> Result<()> {
    let mut storage = LocalStorage::open(&LocalStorage::default_path());
    sign_out(&mut storage)?;
    println!("Logged out");
    Ok(())
}
