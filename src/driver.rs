use async_trait::async_trait;
use tracing::info;

use crate::core::error::AppError;
use crate::features::results::JsonGenerator;

// Every federal election cycle covered by the published FEC datasets.
pub const ELECTION_YEARS: [u16; 8] = [2000, 2002, 2004, 2006, 2008, 2010, 2012, 2014];

pub fn is_presidential_year(year: u16) -> bool {
    year % 4 == 0
}

#[async_trait]
pub trait ResultsGenerator {
    async fn congress(&self) -> Result<(), AppError>;
    async fn summary(&self) -> Result<(), AppError>;
    async fn president(&self) -> Result<(), AppError>;
}

#[async_trait]
impl ResultsGenerator for JsonGenerator {
    async fn congress(&self) -> Result<(), AppError> {
        self.write_congress().await.map(|_| ())
    }

    async fn summary(&self) -> Result<(), AppError> {
        self.write_summary().await.map(|_| ())
    }

    async fn president(&self) -> Result<(), AppError> {
        self.write_president().await.map(|_| ())
    }
}

// Sequential, one fresh generator per year. Errors are not caught here: the
// first failure aborts every remaining year.
pub async fn run_years<G, F>(years: &[u16], mut make_generator: F) -> Result<(), AppError>
where
    G: ResultsGenerator,
    F: FnMut(u16) -> G,
{
    for &year in years {
        info!(year, "generating results");

        let generator = make_generator(year);
        generator.congress().await?;
        generator.summary().await?;

        if is_presidential_year(year) {
            generator.president().await?;
        }
    }

    Ok(())
}
