use ascii_codec::AlphabetCodec;
use rand::RngCore;

fn main() {
    let codec = AlphabetCodec::base32_case_insensitive();

    // 160-bit secret, the usual size for TOTP keys
    let mut secret = [0u8; 20];
    rand::rng().fill_bytes(&mut secret);

    let encoded = codec.encode(&secret);
    println!("Secret:   {:02x?}", secret);
    println!("Encoded:  {}", encoded);

    // What a person might type after reading it off a screen
    let typed = encoded
        .to_ascii_lowercase()
        .replace('o', "0")
        .as_bytes()
        .chunks(4)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(" ");
    println!("Typed:    {}", typed);

    match codec.decode(&typed) {
        Ok(decoded) => println!("Match:    {}", decoded == secret),
        Err(e) => eprintln!("{}", e),
    }

    println!("\n---\n");
    match codec.decode("JBSW Y3DP !!") {
        Ok(decoded) => println!("Decoded:  {:?}", decoded),
        Err(e) => println!("{}", e),
    }
}
