use super::{load_session, open_store};
use crate::error::Result;
use crate::router::Router;

pub fn run(path: &str) -> Result<()> {
    let store = open_store()?;
    let mut router = Router::new(&store, load_session());
    router.on_navigate(path)?;
    println!("{}", router.root());
    Ok(())
}
