/// Commented starter configuration written by `drawing-audit init`.
#[must_use]
pub fn generate_config_template() -> String {
    r#"# drawing-audit configuration file
# Relative paths are resolved against the directory holding this file.
version = "1"

[rules]
# Naming-convention tables (CSV). Row 0 holds the delimiter in column D,
# row 1 the part labels, rows 2+ the allowed values per part.
sheets = "rules/sheets.csv"
# models = "rules/models.csv"   # defaults to the sheet rules

# Extensions that select the model rule table
model_extensions = ["rvt", "nwd", "nwf", "ifc", "nwc"]

[register]
# Drawing register (CSV) listing every expected file
path = "register.csv"
# 0-based column holding the file name
file_column = 0

[title_block]
# Title-block export (CSV), one row per drawing
export = "title_blocks.csv"
# register = "register.csv"     # defaults to [register].path

# Column positions (0-based) of each field
# [title_block.register_columns]
# sheet_no = 0
# sheet_name = 1
# file_name = 2
# rev_code = 3
# rev_date = 4
# suitability_code = 5

[scanner]
# Delivery folder to scan
root = "delivery"
# Only these extensions are audited (empty = all files)
extensions = ["pdf", "dwg", "rvt", "nwd", "nwf", "ifc", "nwc"]
# Exclude patterns (glob syntax, relative to root)
exclude = ["**/superseded/**"]

[output]
# text, json or markdown
format = "text"
# report_dir = "reports"
"#
    .to_string()
}
