/// Dollar rendering for net points: winnings get an explicit sign,
/// a wash is plain `$0`.
#[must_use]
pub fn format_net_money(net: i64) -> String {
    if net > 0 {
        format!("+${net}")
    } else if net < 0 {
        format!("-${}", net.abs())
    } else {
        "$0".to_string()
    }
}

#[must_use]
pub fn format_average(avg: f64) -> String {
    format!("{avg:.1}")
}
