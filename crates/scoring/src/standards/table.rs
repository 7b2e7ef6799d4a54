//! Builtin lifting standards, a snapshot of historical competition results.
//!
//! Columns: sex, weight class, age group, lift, then the max/p95/p90/p75/p50
//! anchors in kilograms and the sample count behind them. Demographics that
//! never reached the sample threshold have no row here.

use crate::models::athlete::{AgeGroup, Sex};

use super::{BucketRow, Lift};

type Row = (Sex, &'static str, AgeGroup, Lift, f64, f64, f64, f64, f64, u32);

#[rustfmt::skip]
const ROWS: &[Row] = &[
    // M Open
    (Sex::M, "59kg", AgeGroup::Open, Lift::Squat, 198.0, 178.5, 168.5, 149.5, 127.5, 78),
    (Sex::M, "59kg", AgeGroup::Open, Lift::Bench, 143.5, 129.5, 122.0, 108.0, 92.5, 82),
    (Sex::M, "59kg", AgeGroup::Open, Lift::Deadlift, 226.5, 204.5, 193.0, 171.0, 146.0, 83),
    (Sex::M, "66kg", AgeGroup::Open, Lift::Squat, 214.0, 193.0, 182.0, 161.5, 138.0, 113),
    (Sex::M, "66kg", AgeGroup::Open, Lift::Bench, 155.0, 140.0, 132.0, 117.0, 100.0, 117),
    (Sex::M, "66kg", AgeGroup::Open, Lift::Deadlift, 245.0, 221.0, 208.5, 185.0, 158.0, 118),
    (Sex::M, "74kg", AgeGroup::Open, Lift::Squat, 235.5, 212.5, 200.5, 177.5, 152.0, 150),
    (Sex::M, "74kg", AgeGroup::Open, Lift::Bench, 170.5, 154.0, 145.0, 128.5, 110.0, 154),
    (Sex::M, "74kg", AgeGroup::Open, Lift::Deadlift, 269.5, 243.5, 229.5, 203.5, 174.0, 155),
    (Sex::M, "83kg", AgeGroup::Open, Lift::Squat, 251.5, 227.0, 214.0, 189.5, 162.0, 185),
    (Sex::M, "83kg", AgeGroup::Open, Lift::Bench, 182.0, 164.5, 155.0, 137.5, 117.5, 189),
    (Sex::M, "83kg", AgeGroup::Open, Lift::Deadlift, 288.0, 260.0, 245.0, 217.0, 185.5, 190),
    (Sex::M, "93kg", AgeGroup::Open, Lift::Squat, 267.5, 241.5, 227.5, 202.0, 172.5, 197),
    (Sex::M, "93kg", AgeGroup::Open, Lift::Bench, 194.0, 175.0, 165.0, 146.0, 125.0, 188),
    (Sex::M, "93kg", AgeGroup::Open, Lift::Deadlift, 306.0, 276.5, 260.5, 231.0, 197.5, 189),
    (Sex::M, "105kg", AgeGroup::Open, Lift::Squat, 283.5, 256.0, 241.5, 214.0, 183.0, 155),
    (Sex::M, "105kg", AgeGroup::Open, Lift::Bench, 205.5, 185.5, 175.0, 155.0, 132.5, 159),
    (Sex::M, "105kg", AgeGroup::Open, Lift::Deadlift, 324.5, 293.0, 276.5, 245.0, 209.5, 147),
    (Sex::M, "120kg", AgeGroup::Open, Lift::Squat, 294.0, 265.5, 250.5, 222.0, 189.5, 114),
    (Sex::M, "120kg", AgeGroup::Open, Lift::Bench, 213.0, 192.5, 181.5, 161.0, 137.5, 118),
    (Sex::M, "120kg", AgeGroup::Open, Lift::Deadlift, 336.5, 304.0, 287.0, 254.0, 217.0, 119),
    (Sex::M, "120+kg", AgeGroup::Open, Lift::Squat, 301.5, 272.5, 257.0, 227.5, 194.5, 75),
    (Sex::M, "120+kg", AgeGroup::Open, Lift::Bench, 218.5, 197.5, 186.0, 165.0, 141.0, 79),
    (Sex::M, "120+kg", AgeGroup::Open, Lift::Deadlift, 345.5, 312.0, 294.0, 260.5, 223.0, 80),
    // F Open
    (Sex::F, "47kg", AgeGroup::Open, Lift::Squat, 122.5, 111.0, 104.5, 92.5, 79.0, 37),
    (Sex::F, "47kg", AgeGroup::Open, Lift::Bench, 89.0, 80.5, 75.5, 67.0, 57.5, 41),
    (Sex::F, "47kg", AgeGroup::Open, Lift::Deadlift, 140.5, 127.0, 119.5, 106.0, 90.5, 45),
    (Sex::F, "52kg", AgeGroup::Open, Lift::Squat, 132.5, 120.0, 113.0, 100.0, 85.5, 60),
    (Sex::F, "52kg", AgeGroup::Open, Lift::Bench, 96.0, 87.0, 82.0, 72.5, 62.0, 58),
    (Sex::F, "52kg", AgeGroup::Open, Lift::Deadlift, 152.0, 137.0, 129.5, 114.5, 98.0, 65),
    (Sex::F, "57kg", AgeGroup::Open, Lift::Squat, 146.0, 132.0, 124.0, 110.0, 94.0, 90),
    (Sex::F, "57kg", AgeGroup::Open, Lift::Bench, 105.5, 95.5, 90.0, 80.0, 68.0, 78),
    (Sex::F, "57kg", AgeGroup::Open, Lift::Deadlift, 167.0, 151.0, 142.0, 126.0, 108.0, 85),
    (Sex::F, "63kg", AgeGroup::Open, Lift::Squat, 156.0, 140.5, 132.5, 117.5, 100.5, 111),
    (Sex::F, "63kg", AgeGroup::Open, Lift::Bench, 113.0, 102.0, 96.0, 85.0, 73.0, 109),
    (Sex::F, "63kg", AgeGroup::Open, Lift::Deadlift, 178.5, 161.0, 152.0, 134.5, 115.0, 103),
    (Sex::F, "69kg", AgeGroup::Open, Lift::Squat, 166.0, 149.5, 141.0, 125.0, 107.0, 101),
    (Sex::F, "69kg", AgeGroup::Open, Lift::Bench, 120.0, 108.5, 102.5, 90.5, 77.5, 105),
    (Sex::F, "69kg", AgeGroup::Open, Lift::Deadlift, 190.0, 171.5, 161.5, 143.5, 122.5, 109),
    (Sex::F, "76kg", AgeGroup::Open, Lift::Squat, 175.5, 158.5, 149.5, 132.5, 113.5, 85),
    (Sex::F, "76kg", AgeGroup::Open, Lift::Bench, 127.5, 115.0, 108.5, 96.0, 82.0, 83),
    (Sex::F, "76kg", AgeGroup::Open, Lift::Deadlift, 201.0, 181.5, 171.5, 152.0, 130.0, 90),
    (Sex::F, "84kg", AgeGroup::Open, Lift::Squat, 182.5, 164.5, 155.5, 137.5, 117.5, 61),
    (Sex::F, "84kg", AgeGroup::Open, Lift::Bench, 132.0, 119.5, 112.5, 99.5, 85.0, 59),
    (Sex::F, "84kg", AgeGroup::Open, Lift::Deadlift, 209.0, 188.5, 178.0, 157.5, 134.5, 66),
    (Sex::F, "84+kg", AgeGroup::Open, Lift::Squat, 187.0, 169.0, 159.0, 141.0, 120.5, 36),
    (Sex::F, "84+kg", AgeGroup::Open, Lift::Bench, 135.5, 122.5, 115.5, 102.5, 87.5, 37),
    (Sex::F, "84+kg", AgeGroup::Open, Lift::Deadlift, 214.0, 193.5, 182.5, 161.5, 138.0, 44),
    // M Junior
    (Sex::M, "66kg", AgeGroup::Junior, Lift::Squat, 192.5, 174.0, 164.0, 145.5, 124.0, 31),
    (Sex::M, "66kg", AgeGroup::Junior, Lift::Bench, 139.5, 126.0, 119.0, 105.5, 90.0, 35),
    (Sex::M, "66kg", AgeGroup::Junior, Lift::Deadlift, 220.5, 199.0, 187.5, 166.5, 142.0, 36),
    (Sex::M, "74kg", AgeGroup::Junior, Lift::Squat, 212.0, 191.5, 180.5, 160.0, 136.5, 52),
    (Sex::M, "74kg", AgeGroup::Junior, Lift::Bench, 153.5, 138.5, 130.5, 116.0, 99.0, 43),
    (Sex::M, "74kg", AgeGroup::Junior, Lift::Deadlift, 242.5, 219.0, 206.5, 183.0, 156.5, 44),
    (Sex::M, "83kg", AgeGroup::Junior, Lift::Squat, 226.0, 204.5, 192.5, 170.5, 146.0, 60),
    (Sex::M, "83kg", AgeGroup::Junior, Lift::Bench, 164.0, 148.0, 139.5, 123.5, 106.0, 64),
    (Sex::M, "83kg", AgeGroup::Junior, Lift::Deadlift, 259.0, 234.0, 220.5, 195.5, 167.0, 52),
    (Sex::M, "93kg", AgeGroup::Junior, Lift::Squat, 240.5, 217.5, 205.0, 181.5, 155.0, 59),
    (Sex::M, "93kg", AgeGroup::Junior, Lift::Bench, 174.5, 157.5, 148.5, 131.5, 112.5, 63),
    (Sex::M, "93kg", AgeGroup::Junior, Lift::Deadlift, 275.5, 249.0, 234.5, 208.0, 178.0, 57),
    (Sex::M, "105kg", AgeGroup::Junior, Lift::Squat, 255.0, 230.5, 217.0, 192.5, 164.5, 43),
    (Sex::M, "105kg", AgeGroup::Junior, Lift::Bench, 185.0, 167.0, 157.5, 139.5, 119.0, 50),
    (Sex::M, "105kg", AgeGroup::Junior, Lift::Deadlift, 292.0, 264.0, 248.5, 220.5, 188.5, 51),
    // F Junior
    (Sex::F, "52kg", AgeGroup::Junior, Lift::Squat, 119.5, 108.0, 101.5, 90.0, 77.0, 20),
    (Sex::F, "52kg", AgeGroup::Junior, Lift::Bench, 86.5, 78.0, 73.5, 65.5, 56.0, 21),
    (Sex::F, "52kg", AgeGroup::Junior, Lift::Deadlift, 136.5, 123.5, 116.5, 103.0, 88.0, 15),
    (Sex::F, "57kg", AgeGroup::Junior, Lift::Squat, 131.5, 118.5, 112.0, 99.0, 84.5, 19),
    (Sex::F, "57kg", AgeGroup::Junior, Lift::Bench, 95.0, 86.0, 81.0, 72.0, 61.5, 23),
    (Sex::F, "57kg", AgeGroup::Junior, Lift::Deadlift, 150.5, 136.0, 128.0, 113.5, 97.0, 27),
    (Sex::F, "63kg", AgeGroup::Junior, Lift::Squat, 140.0, 126.5, 119.5, 106.0, 90.5, 36),
    (Sex::F, "63kg", AgeGroup::Junior, Lift::Bench, 101.5, 92.0, 86.5, 76.5, 65.5, 27),
    (Sex::F, "63kg", AgeGroup::Junior, Lift::Deadlift, 160.5, 145.0, 136.5, 121.0, 103.5, 31),
    (Sex::F, "69kg", AgeGroup::Junior, Lift::Squat, 149.0, 135.0, 127.0, 112.5, 96.5, 28),
    (Sex::F, "69kg", AgeGroup::Junior, Lift::Bench, 108.0, 97.5, 92.0, 81.5, 70.0, 26),
    (Sex::F, "69kg", AgeGroup::Junior, Lift::Deadlift, 171.0, 154.5, 145.5, 129.0, 110.0, 33),
    (Sex::F, "76kg", AgeGroup::Junior, Lift::Squat, 158.0, 143.0, 134.5, 119.5, 102.0, 27),
    (Sex::F, "76kg", AgeGroup::Junior, Lift::Bench, 114.5, 103.5, 97.5, 86.5, 74.0, 31),
    (Sex::F, "76kg", AgeGroup::Junior, Lift::Deadlift, 181.0, 163.5, 154.0, 136.5, 117.0, 25),
    // M Masters1
    (Sex::M, "74kg", AgeGroup::Masters1, Lift::Squat, 219.0, 197.5, 186.5, 165.0, 141.0, 41),
    (Sex::M, "74kg", AgeGroup::Masters1, Lift::Bench, 158.5, 143.0, 135.0, 119.5, 102.5, 39),
    (Sex::M, "74kg", AgeGroup::Masters1, Lift::Deadlift, 250.5, 226.5, 213.5, 189.0, 161.5, 33),
    (Sex::M, "83kg", AgeGroup::Masters1, Lift::Squat, 233.5, 211.0, 199.0, 176.5, 151.0, 46),
    (Sex::M, "83kg", AgeGroup::Masters1, Lift::Bench, 169.5, 153.0, 144.0, 128.0, 109.5, 37),
    (Sex::M, "83kg", AgeGroup::Masters1, Lift::Deadlift, 267.5, 241.5, 228.0, 202.0, 172.5, 38),
    (Sex::M, "93kg", AgeGroup::Masters1, Lift::Squat, 248.5, 224.5, 212.0, 187.5, 160.5, 44),
    (Sex::M, "93kg", AgeGroup::Masters1, Lift::Bench, 180.0, 163.0, 153.5, 136.0, 116.0, 48),
    (Sex::M, "93kg", AgeGroup::Masters1, Lift::Deadlift, 284.5, 257.0, 242.5, 215.0, 183.5, 49),
    (Sex::M, "105kg", AgeGroup::Masters1, Lift::Squat, 263.5, 238.0, 224.5, 199.0, 170.0, 33),
    (Sex::M, "105kg", AgeGroup::Masters1, Lift::Bench, 191.0, 172.5, 162.5, 144.0, 123.0, 37),
    (Sex::M, "105kg", AgeGroup::Masters1, Lift::Deadlift, 302.0, 272.5, 257.0, 228.0, 194.5, 38),
    // F Masters1
    (Sex::F, "57kg", AgeGroup::Masters1, Lift::Squat, 135.5, 122.5, 115.5, 102.5, 87.5, 18),
    (Sex::F, "57kg", AgeGroup::Masters1, Lift::Bench, 98.5, 89.0, 83.5, 74.0, 63.5, 22),
    (Sex::F, "57kg", AgeGroup::Masters1, Lift::Deadlift, 155.5, 140.5, 132.5, 117.0, 100.0, 23),
    (Sex::F, "63kg", AgeGroup::Masters1, Lift::Squat, 145.0, 131.0, 123.5, 109.5, 93.5, 20),
    (Sex::F, "63kg", AgeGroup::Masters1, Lift::Bench, 105.0, 95.0, 89.5, 79.5, 68.0, 24),
    (Sex::F, "63kg", AgeGroup::Masters1, Lift::Deadlift, 166.0, 150.0, 141.5, 125.0, 107.0, 25),
    (Sex::F, "69kg", AgeGroup::Masters1, Lift::Squat, 154.0, 139.0, 131.5, 116.5, 99.5, 29),
    (Sex::F, "69kg", AgeGroup::Masters1, Lift::Bench, 111.5, 101.0, 95.0, 84.5, 72.0, 20),
    (Sex::F, "69kg", AgeGroup::Masters1, Lift::Deadlift, 176.5, 159.5, 150.5, 133.0, 114.0, 24),
    (Sex::F, "76kg", AgeGroup::Masters1, Lift::Squat, 163.5, 147.5, 139.0, 123.5, 105.5, 24),
    (Sex::F, "76kg", AgeGroup::Masters1, Lift::Bench, 118.5, 107.0, 101.0, 89.5, 76.5, 15),
    (Sex::F, "76kg", AgeGroup::Masters1, Lift::Deadlift, 187.0, 169.0, 159.5, 141.0, 120.5, 16),
    // M Masters2
    (Sex::M, "83kg", AgeGroup::Masters2, Lift::Squat, 216.0, 195.0, 184.0, 163.0, 139.5, 12),
    (Sex::M, "83kg", AgeGroup::Masters2, Lift::Bench, 156.5, 141.5, 133.5, 118.0, 101.0, 16),
    (Sex::M, "83kg", AgeGroup::Masters2, Lift::Deadlift, 247.5, 223.5, 210.5, 187.0, 159.5, 17),
    (Sex::M, "93kg", AgeGroup::Masters2, Lift::Squat, 230.0, 207.5, 196.0, 173.5, 148.5, 10),
    (Sex::M, "93kg", AgeGroup::Masters2, Lift::Bench, 166.5, 150.5, 142.0, 126.0, 107.5, 15),
    (Sex::M, "93kg", AgeGroup::Masters2, Lift::Deadlift, 263.5, 238.0, 224.0, 198.5, 170.0, 19),
    // F Masters2
    (Sex::F, "63kg", AgeGroup::Masters2, Lift::Squat, 134.0, 121.0, 114.0, 101.0, 86.5, 10),
    (Sex::F, "63kg", AgeGroup::Masters2, Lift::Bench, 97.0, 87.5, 82.5, 73.5, 62.5, 10),
    (Sex::F, "63kg", AgeGroup::Masters2, Lift::Deadlift, 153.5, 138.5, 130.5, 116.0, 99.0, 10),
    (Sex::F, "69kg", AgeGroup::Masters2, Lift::Squat, 142.5, 129.0, 121.5, 107.5, 92.0, 14),
    (Sex::F, "69kg", AgeGroup::Masters2, Lift::Bench, 103.5, 93.5, 88.0, 78.0, 66.5, 10),
    (Sex::F, "69kg", AgeGroup::Masters2, Lift::Deadlift, 163.0, 147.5, 139.0, 123.0, 105.5, 10),
];

pub(super) fn builtin_rows() -> Vec<BucketRow> {
    ROWS.iter()
        .map(|&(sex, weight_class, age_group, lift, max, p95, p90, p75, p50, count)| BucketRow {
            sex,
            weight_class: weight_class.to_string(),
            age_group,
            lift,
            max,
            p95,
            p90,
            p75,
            p50,
            count,
        })
        .collect()
}
