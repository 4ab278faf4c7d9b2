use huffcode::{entropy, huffman_coding};

fn main() -> Result<(), huffcode::Error> {
    let source = ['a', 'b', 'c', 'd', 'e'];
    let probabilities = [1.0 / 3.0, 1.0 / 5.0, 1.0 / 5.0, 2.0 / 15.0, 2.0 / 15.0];

    let codes = huffman_coding(&source, &probabilities)?;

    println!("Symbol probabilities and Huffman codes:");
    for (symbol, p) in source.iter().zip(probabilities) {
        let code = codes.get(symbol).map(|c| c.as_str()).unwrap_or("-");
        println!("  {symbol}  p = {p:.4}  code = {code}");
    }

    let expected = codes.expected_length(source.iter().zip(probabilities));
    println!("Expected length: {expected:.4} bits");
    println!("Entropy:         {:.4} bits", entropy(&probabilities)?);
    Ok(())
}
