use clap::Parser;
use roster_common::params::UserParams;
use roster_db::storage::UserStore;

#[derive(Clone, Parser)]
pub struct CreateUserParams {
    #[clap(short, long)]
    pub first_name: String,

    #[clap(short, long)]
    pub last_name: String,

    #[clap(short, long)]
    pub email: String,

    #[clap(short, long)]
    pub password: String,
}

impl From<CreateUserParams> for UserParams {
    fn from(value: CreateUserParams) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            password: value.password,
        }
    }
}

pub async fn create_user(stg: &impl UserStore, params: CreateUserParams) -> anyhow::Result<()> {
    let params: UserParams = params.into();
    let new_user = UserStore::create(stg, params.into()).await?;

    match new_user.id {
        Some(id) => println!("Created user {} with ID {}", new_user.email, id),
        None => println!("Created user {}", new_user.email),
    }

    Ok(())
}
