mod output;
mod watchlist;

pub(crate) use output::Format;
pub(crate) use watchlist::Host;
