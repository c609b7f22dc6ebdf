use crate::align::structs::Alignment;

use anyhow::{Context, Result};
use std::io::Write;
use strum::{EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Field {
    Query,
    Target,
    Mode,
    Cost,
    AliLength,
    CellCount,
}

impl Field {
    /// Every field, in the default column order.
    pub fn all() -> Vec<Field> {
        Field::iter().collect()
    }

    pub fn extract_from(&self, alignment: &Alignment) -> String {
        match self {
            Field::Query => match alignment.seq_1_name.as_str() {
                "" => "-".to_string(),
                name => name.to_string(),
            },
            Field::Target => match alignment.seq_2_name.as_str() {
                "" => "-".to_string(),
                name => name.to_string(),
            },
            Field::Mode => alignment.mode.to_string(),
            Field::Cost => alignment.cost.to_string(),
            Field::AliLength => alignment.length.to_string(),
            Field::CellCount => alignment.cells.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct TableFormat {
    pub fields: Vec<Field>,
    pub labels: Vec<Vec<String>>,
    pub widths: Vec<usize>,
}

impl TableFormat {
    pub fn new(fields: &[Field]) -> anyhow::Result<Self> {
        let mut labels = vec![];
        let mut widths = vec![];

        let first_field = fields.first().context("no fields supplied to TableFormat")?;

        // this regex matches CamelCaseWords
        let label_regex =
            regex::Regex::new(r"[A-Z][a-z]*").context("failed to build field label regex")?;

        // this closure extracts the words & minimum column width for a field
        let label_fn = |field: &Field| -> anyhow::Result<(Vec<_>, usize), anyhow::Error> {
            // the Debug string for an enum produces the variant name
            let field_name = format!("{:?}", field);

            // grab each word and its length in the variant name
            let (label_words, lengths): (Vec<_>, Vec<_>) = label_regex
                .find_iter(&field_name)
                .map(|m| (m.as_str().to_string().to_lowercase(), m.len()))
                .unzip();

            // the length of the longest word
            // is the min width of the column
            let min_width = *lengths
                .iter()
                .max()
                .context("failed to produce max field label width")?;
            Ok((label_words, min_width))
        };

        // we need to process the first field differently
        // because it needs to have at least +2 to
        // its minimum width to accomodate the "# " prefix
        let (mut label_words, mut min_width) = label_fn(first_field)?;
        labels.push(label_words);
        widths.push(min_width + 2);

        for field in fields.iter().skip(1) {
            (label_words, min_width) = label_fn(field)?;
            labels.push(label_words);
            widths.push(min_width);
        }

        Ok(Self {
            fields: fields.to_vec(),
            labels,
            widths,
        })
    }

    pub fn update_widths(&mut self, alignments: &[Alignment]) {
        alignments.iter().for_each(|alignment| {
            self.fields.iter().enumerate().for_each(|(idx, field)| {
                let width = field.extract_from(alignment).len();
                self.widths[idx] = self.widths[idx].max(width);
            })
        });
    }

    pub fn header(&self) -> anyhow::Result<String> {
        // the number of rows in the header is
        // the max number of words in a field
        let num_rows = self
            // each entry in labels is
            // a vector of label words
            .labels
            .iter()
            .map(|l| l.len())
            .max()
            .context("field headers are empty")?;

        let mut header_row_strings: Vec<String> = vec!["# ".to_string(); num_rows + 1];

        // this function appends the field labels to the header
        let header_append_fn =
            |words: &Vec<String>, width: usize, header_row_strings: &mut Vec<String>| {
                let offset = num_rows - words.len();
                let mut words_padded = vec![""; offset];
                words.iter().for_each(|w| words_padded.push(w));

                words_padded.iter().enumerate().for_each(|(row, token)| {
                    let row_string = &mut header_row_strings[row];
                    *row_string = format!("{row_string}{:width$} ", token, width = width);
                });

                if let Some(last_row_string) = header_row_strings.last_mut() {
                    *last_row_string = format!("{last_row_string}{} ", "-".repeat(width));
                }
            };

        // the first column gets -2 to it's width to account for the "# "
        header_append_fn(&self.labels[0], self.widths[0] - 2, &mut header_row_strings);

        self.labels
            .iter()
            // skip the first column
            .skip(1)
            .zip(self.widths.iter().skip(1))
            .for_each(|(words, &width)| {
                header_append_fn(words, width, &mut header_row_strings);
            });

        Ok(header_row_strings
            .iter()
            .map(|row| row.trim_end())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    pub fn row(&self, alignment: &Alignment) -> String {
        let mut tab_string = String::new();

        self.fields
            .iter()
            .zip(self.widths.iter())
            .for_each(|(field, width)| {
                let val = field.extract_from(alignment);
                tab_string = format!("{tab_string}{val:width$} ", width = width)
            });

        tab_string.trim_end().to_string()
    }
}

/// Write a header followed by one row per alignment, with columns sized to fit every row.
pub fn write_tabular_output(alignments: &[Alignment], out: &mut impl Write) -> Result<()> {
    let mut table_format = TableFormat::new(&Field::all())?;
    table_format.update_widths(alignments);

    writeln!(out, "{}", table_format.header()?)?;
    for alignment in alignments {
        writeln!(out, "{}", table_format.row(alignment))?;
    }
    Ok(())
}
