pub fn write_csv<I, R, W>(records: I, writer: W) -> anyhow::Result<()>
where
    I: IntoIterator<Item = R>,
    R: serde::Serialize,
    W: std::io::Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records.into_iter() {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ex_price::PriceRow;

    #[test]
    fn writes_header_and_rows() {
        let rows = [
            PriceRow {
                original: 775.0,
                adjusted: 717.5,
            },
            PriceRow {
                original: 776.0,
                adjusted: 718.5,
            },
        ];
        let mut out = Vec::new();
        write_csv(rows, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "original,adjusted\n775.0,717.5\n776.0,718.5\n");
    }
}
