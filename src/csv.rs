use serde::{de::DeserializeOwned, Serialize};

use crate::Error;

/// Serializes `items` to CSV, with a header derived from the first item
/// # Error
/// Errors if an item cannot be represented as a CSV record
pub fn serialize(items: impl Iterator<Item = impl Serialize>) -> Result<Vec<u8>, Error> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for item in items {
        wtr.serialize(item)?;
    }
    wtr.into_inner()
        .map_err(|e| Error::Csv(e.into_error().into()))
}

/// Deserializes every record of a CSV with a header.
/// Each record is returned as its own [`Result`], so that a malformed line does not
/// prevent the remaining ones from being read.
pub fn deserialize<'a, D: DeserializeOwned + 'a>(
    data: &'a [u8],
) -> impl Iterator<Item = Result<D, Error>> + 'a {
    let rdr = csv::ReaderBuilder::new()
        .delimiter(b',')
        .trim(csv::Trim::All)
        .from_reader(std::io::Cursor::new(data));
    rdr.into_deserialize().map(|r| r.map_err(Error::from))
}
