mod buckets;
mod eiin_no;
mod institute;
