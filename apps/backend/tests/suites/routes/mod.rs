mod health;
mod posts;
mod votes;
