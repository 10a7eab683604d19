use chrono::{DateTime, Datelike, Local, Timelike};

/// Name of the folder a backup taken at the given time goes into, e.g. `20010203-140506`
pub fn generate_name<F>(get_time: F) -> String
where
	F: Fn() -> DateTime<Local>,
{
	let time = get_time();
	format!(
		"{:04}{:02}{:02}-{:02}{:02}{:02}",
		time.year(),
		time.month(),
		time.day(),
		time.hour(),
		time.minute(),
		time.second()
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	#[test]
	fn test_generates_set_name() {
		let fixed_time = Local.with_ymd_and_hms(2001, 2, 3, 14, 5, 6).unwrap();
		let name = generate_name(|| fixed_time);
		assert_eq!(name, "20010203-140506");
	}

	#[test]
	fn test_pads_single_digit_fields() {
		let fixed_time = Local.with_ymd_and_hms(2009, 1, 1, 0, 0, 9).unwrap();
		assert_eq!(generate_name(|| fixed_time), "20090101-000009");
	}

	#[test]
	fn test_same_second_gives_same_name() {
		let fixed_time = Local.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
		let first = generate_name(|| fixed_time);
		let second = generate_name(|| fixed_time + chrono::Duration::milliseconds(400));
		assert_eq!(first, second);
	}
}
