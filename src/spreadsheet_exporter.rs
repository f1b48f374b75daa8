use {super::*, anyhow::Context};

pub(crate) struct SpreadsheetExporter {
  directory: PathBuf,
}

impl SpreadsheetExporter {
  const COLUMNS: [(&str, f64); 6] = [
    ("Username", 25.0),
    ("Comment", 80.0),
    ("Likes", 10.0),
    ("Published At", 20.0),
    ("Updated At", 20.0),
    ("Reply Count", 12.0),
  ];

  const SHEET_NAME: &str = "Comments";

  pub(crate) fn export(
    &self,
    records: &[CommentRecord],
    video_id: &VideoId,
    timestamp: NaiveDateTime,
  ) -> Result<PathBuf> {
    debug_assert!(!records.is_empty(), "export called without records");

    let path = self.directory.join(Self::filename(video_id, timestamp));

    println!("\nExporting to Excel: {}", path.display());

    Self::workbook(records)?
      .save(&path)
      .with_context(|| format!("failed to write `{}`", path.display()))?;

    info!(path = %path.display(), rows = records.len(), "wrote spreadsheet");

    Ok(path)
  }

  pub(crate) fn filename(video_id: &VideoId, timestamp: NaiveDateTime) -> String {
    format!(
      "youtube_comments_{video_id}_{}.xlsx",
      timestamp.format("%Y%m%d_%H%M%S")
    )
  }

  pub(crate) fn new(directory: PathBuf) -> Self {
    Self { directory }
  }

  pub(crate) fn rows(records: &[CommentRecord]) -> Vec<[Cell<'_>; 6]> {
    let mut rows = Vec::with_capacity(records.len() + 1);

    rows.push(Self::COLUMNS.map(|(title, _)| Cell::Text(title)));

    rows.extend(records.iter().map(CommentRecord::cells));

    rows
  }

  #[allow(clippy::cast_precision_loss)]
  pub(crate) fn workbook(records: &[CommentRecord]) -> Result<Workbook> {
    let mut workbook = Workbook::new();

    let worksheet = workbook.add_worksheet();

    worksheet.set_name(Self::SHEET_NAME)?;

    for (column, (_, width)) in Self::COLUMNS.iter().enumerate() {
      worksheet.set_column_width(u16::try_from(column)?, *width)?;
    }

    let header = Format::new().set_bold();

    for (row, cells) in Self::rows(records).iter().enumerate() {
      let row = u32::try_from(row)?;

      for (column, cell) in cells.iter().enumerate() {
        let column = u16::try_from(column)?;

        match cell {
          Cell::Number(value) => {
            worksheet.write_number(row, column, *value as f64)?
          }
          Cell::Text(text) if row == 0 => {
            worksheet.write_string_with_format(row, column, *text, &header)?
          }
          Cell::Text(text) => worksheet.write_string(row, column, *text)?,
        };
      }
    }

    Ok(workbook)
  }
}
